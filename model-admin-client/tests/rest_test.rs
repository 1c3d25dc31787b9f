//! REST 后端集成测试
//!
//! 运行方式:
//! ```bash
//! MODEL_ADMIN_TEST_URL=http://localhost:3000/api/admin MODEL_ADMIN_TEST_TOKEN=xxx \
//!     cargo test -p model-admin-client --test rest_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use model_admin_client::{AdminBackend, ClientError, ModelName, RecordId, RestBackend};

// ============ 离线测试 ============

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // 端口 1 在本机上没有监听者
    let backend = require_ok!(RestBackend::new("http://127.0.0.1:1", None));
    let result = backend.list_models().await;
    assert!(
        matches!(&result, Err(ClientError::Network { .. })),
        "unexpected: {result:?}"
    );
}

// ============ 基础测试 ============

#[tokio::test]
#[ignore]
async fn test_list_models() {
    skip_if_no_backend!("MODEL_ADMIN_TEST_URL");

    let Some(ctx) = TestContext::from_env() else {
        return;
    };
    let models = require_ok!(ctx.backend.list_models().await, "list_models 调用失败");
    assert!(!models.is_empty(), "模型列表不应为空");

    println!("✓ list_models 测试通过，共 {} 个模型", models.len());
}

#[tokio::test]
#[ignore]
async fn test_field_order_is_stable() {
    skip_if_no_backend!("MODEL_ADMIN_TEST_URL");

    let Some(mut ctx) = TestContext::from_env() else {
        return;
    };
    let Some(model) = ctx.resolve_model().await else {
        return;
    };

    let first = require_ok!(ctx.backend.get_fields(&model).await);
    let second = require_ok!(ctx.backend.get_fields(&model).await);
    assert_eq!(first, second, "两次获取的字段顺序应一致");

    println!("✓ get_fields 测试通过: {model} 共 {} 个字段", first.len());
}

#[tokio::test]
#[ignore]
async fn test_list_records_echoes_request() {
    skip_if_no_backend!("MODEL_ADMIN_TEST_URL");

    let Some(mut ctx) = TestContext::from_env() else {
        return;
    };
    let Some(model) = ctx.resolve_model().await else {
        return;
    };

    let page = require_ok!(ctx.backend.list_records(&model, 1, 5).await);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 5);
    assert!(page.records.len() <= 5);

    println!("✓ list_records 测试通过: total={}", page.total);
}

#[tokio::test]
#[ignore]
async fn test_missing_record_is_not_found() {
    skip_if_no_backend!("MODEL_ADMIN_TEST_URL");

    let Some(mut ctx) = TestContext::from_env() else {
        return;
    };
    let Some(model) = ctx.resolve_model().await else {
        return;
    };

    let result = ctx
        .backend
        .get_record(&model, &RecordId::new("__missing_record__"))
        .await;
    assert!(
        matches!(&result, Err(ClientError::NotFound { .. })),
        "unexpected: {result:?}"
    );
}

#[tokio::test]
#[ignore]
async fn test_unknown_model_fails() {
    skip_if_no_backend!("MODEL_ADMIN_TEST_URL");

    let Some(ctx) = TestContext::from_env() else {
        return;
    };
    let result = ctx
        .backend
        .get_fields(&ModelName::new("__NoSuchModel__"))
        .await;
    assert!(result.is_err(), "未知模型应返回错误");
}
