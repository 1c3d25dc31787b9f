//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use model_admin_client::{AdminBackend, ModelName, RestBackend};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_backend {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装后端和测试模型
pub struct TestContext {
    pub backend: Arc<dyn AdminBackend>,
    /// 用于读写测试的模型（`MODEL_ADMIN_TEST_MODEL`，默认为第一个模型）
    pub model: Option<ModelName>,
}

impl TestContext {
    /// 从环境变量创建测试上下文
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("MODEL_ADMIN_TEST_URL").ok()?;
        let token = env::var("MODEL_ADMIN_TEST_TOKEN").ok();
        let backend = RestBackend::new(base_url, token).ok()?;
        let model = env::var("MODEL_ADMIN_TEST_MODEL").ok().map(ModelName::new);

        Some(Self {
            backend: Arc::new(backend),
            model,
        })
    }

    /// 解析测试模型：优先使用环境变量，否则取模型列表第一项
    pub async fn resolve_model(&mut self) -> Option<ModelName> {
        if self.model.is_none() {
            let models = self.backend.list_models().await.ok()?;
            self.model = models.into_iter().next();
        }
        self.model.clone()
    }
}
