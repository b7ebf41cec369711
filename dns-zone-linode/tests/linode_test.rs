//! Linode 集成测试
//!
//! 运行方式:
//! ```bash
//! LINODE_DNS_PAT=xxx TEST_DOMAIN=example.com \
//!     cargo test -p dns-zone-linode --test linode_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use std::time::Duration;

use common::{TestContext, a, generate_test_record_name, txt};
use dns_zone_linode::{RecordData, RecordType, ResourceRecord, ZoneEditor};

#[tokio::test]
#[ignore]
async fn test_linode_list_zones() {
    skip_if_no_credentials!("LINODE_DNS_PAT", "TEST_DOMAIN");

    let ctx = TestContext::linode().expect("创建测试上下文失败");
    let zones = require_ok!(ctx.provider.list_zones().await, "list_zones 调用失败");
    assert!(
        zones.iter().any(|z| z.name == ctx.domain),
        "测试域名不在列表中"
    );

    println!("✓ list_zones 测试通过，共 {} 个域名", zones.len());
}

#[tokio::test]
#[ignore]
async fn test_linode_get_records() {
    skip_if_no_credentials!("LINODE_DNS_PAT", "TEST_DOMAIN");

    let ctx = TestContext::linode().expect("创建测试上下文失败");
    let records = require_ok!(
        ctx.provider.get_records(&ctx.domain).await,
        "get_records 调用失败"
    );

    println!("✓ get_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_linode_append_and_delete() {
    skip_if_no_credentials!("LINODE_DNS_PAT", "TEST_DOMAIN");

    let ctx = TestContext::linode().expect("创建测试上下文失败");
    let name = generate_test_record_name();
    let input = vec![
        txt(&name, "integration-test", 300),
        a(&name, "192.0.2.1", 300),
    ];

    let added = require_ok!(
        ctx.provider.append_records(&ctx.domain, &input).await,
        "append_records 调用失败"
    );
    assert_eq!(added, input, "创建的记录与输入不一致");

    let deleted = require_ok!(
        ctx.provider
            .delete_records(&ctx.domain, &[ResourceRecord::named(&name)])
            .await,
        "delete_records 调用失败"
    );
    assert_eq!(deleted.len(), 2, "应删除两条记录");

    println!("✓ append/delete 测试通过: {name}");
}

#[tokio::test]
#[ignore]
async fn test_linode_set_replaces_group() {
    skip_if_no_credentials!("LINODE_DNS_PAT", "TEST_DOMAIN");

    let ctx = TestContext::linode().expect("创建测试上下文失败");
    let name = generate_test_record_name();

    require_ok!(
        ctx.provider
            .append_records(
                &ctx.domain,
                &[
                    a(&name, "192.0.2.1", 300),
                    a(&name, "192.0.2.2", 300),
                    txt(&name, "keep-me", 300),
                ],
            )
            .await
    );

    let result = ctx
        .provider
        .set_records(&ctx.domain, &[a(&name, "192.0.2.3", 300)])
        .await;

    let records = ctx.provider.get_records(&ctx.domain).await;
    let _ = ctx
        .provider
        .delete_records(&ctx.domain, &[ResourceRecord::named(&name)])
        .await;

    let set = require_ok!(result, "set_records 调用失败");
    assert_eq!(set.len(), 1);

    let records = require_ok!(records);
    let ours: Vec<_> = records.iter().filter(|r| r.name == name).collect();
    assert_eq!(ours.len(), 2, "应剩余 A 与 TXT 各一条");
    assert!(ours.iter().any(|r| r.record_type() == RecordType::Txt));

    println!("✓ set_records 测试通过: {name}");
}

#[tokio::test]
#[ignore]
async fn test_linode_append_skips_service_binding() {
    skip_if_no_credentials!("LINODE_DNS_PAT", "TEST_DOMAIN");

    let ctx = TestContext::linode().expect("创建测试上下文失败");
    let name = generate_test_record_name();
    let unsupported = dns_zone_linode::Record::new(
        &name,
        Duration::from_secs(60),
        RecordData::ServiceBinding {
            scheme: "https".to_string(),
            priority: 1,
            target: format!("svc.{}", ctx.domain),
            params: String::new(),
        },
    );

    let added = require_ok!(
        ctx.provider
            .append_records(&ctx.domain, &[txt(&name, "supported", 300), unsupported])
            .await
    );
    let _ = ctx
        .provider
        .delete_records(&ctx.domain, &[ResourceRecord::named(&name)])
        .await;

    assert_eq!(added.len(), 1, "不支持的记录应被跳过");
    println!("✓ ServiceBinding 跳过测试通过");
}
