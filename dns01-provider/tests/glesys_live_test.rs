//! GleSYS live API tests
//!
//! Run with:
//! ```bash
//! GLESYS_USER=CL12345 GLESYS_PASSWORD=xxx TEST_DOMAIN=example.com \
//!     cargo test -p dns01-provider --test glesys_live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name};

#[tokio::test]
#[ignore]
async fn test_glesys_validate_credentials() {
    skip_if_no_credentials!("GLESYS_USER", "GLESYS_PASSWORD", "TEST_DOMAIN");

    let ctx = TestContext::glesys().expect("failed to build test context");
    let result = ctx.directory.validate_credentials().await;

    assert!(matches!(result, Ok(true)), "credentials should be valid: {result:?}");
}

#[tokio::test]
#[ignore]
async fn test_glesys_list_zones_contains_test_domain() {
    skip_if_no_credentials!("GLESYS_USER", "GLESYS_PASSWORD", "TEST_DOMAIN");

    let ctx = TestContext::glesys().expect("failed to build test context");
    let zones = ctx.directory.list_zones().await.expect("list_zones failed");

    assert!(
        zones.iter().any(|z| z.name == ctx.zone),
        "{} missing from zone list",
        ctx.zone
    );
}

#[tokio::test]
#[ignore]
async fn test_glesys_txt_record_lifecycle() {
    skip_if_no_credentials!("GLESYS_USER", "GLESYS_PASSWORD", "TEST_DOMAIN");

    let ctx = TestContext::glesys().expect("failed to build test context");
    let record_name = generate_test_record_name();
    let value = format!("dns01-{record_name}");

    assert!(ctx.create_test_record(&record_name, &value).await, "failed to create record");

    let record = ctx
        .find_record(&record_name, &value)
        .await
        .expect("record missing after create");
    assert_eq!(record.ttl, 60);

    ctx.directory
        .delete_record(&ctx.zone, &record.id)
        .await
        .expect("failed to delete record");

    assert!(ctx.find_record(&record_name, &value).await.is_none(), "record should be gone");
}

/// Remove leftover test records (run by hand)
#[tokio::test]
#[ignore]
async fn test_glesys_cleanup_test_records() {
    skip_if_no_credentials!("GLESYS_USER", "GLESYS_PASSWORD", "TEST_DOMAIN");

    let ctx = TestContext::glesys().expect("failed to build test context");
    ctx.cleanup_all_test_records().await;
}
