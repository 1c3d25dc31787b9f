//! 命令执行器
//!
//! 控制器只产出 [`Command`]，这里把它们放到 tokio 运行时中执行，
//! 完成后将 [`Outcome`] 通过通道送回主循环。
//!
//! 命令之间互不等待：晚到的旧结果由控制器按序号丢弃。

use std::sync::Arc;

use model_admin_core::{Command, Outcome, Services};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 后端命令执行器
pub struct Executor {
    services: Arc<Services>,
    handle: Handle,
    tx: UnboundedSender<Outcome>,
}

impl Executor {
    /// 创建执行器，返回结果接收端
    pub fn new(services: Arc<Services>, handle: Handle) -> (Self, UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                services,
                handle,
                tx,
            },
            rx,
        )
    }

    /// 异步执行一条命令
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching: {}", command.describe());

        let services = Arc::clone(&self.services);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = command.execute(&services).await;
            if tx.send(outcome).is_err() {
                // 主循环已退出
                log::debug!("Outcome dropped: receiver closed");
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use async_trait::async_trait;
    use model_admin_client::{
        AdminBackend, ClientError, FieldDescriptor, FieldType, ModelName, Page, Payload, Record,
        RecordId,
    };
    use model_admin_core::{ServiceContext, Ticket};

    use super::*;

    /// 只认识 `Course` 的内存后端
    struct StaticBackend;

    fn unknown(model: &ModelName) -> ClientError {
        ClientError::NotFound {
            resource: model.to_string(),
        }
    }

    #[async_trait]
    impl AdminBackend for StaticBackend {
        fn id(&self) -> &'static str {
            "static"
        }

        async fn list_models(&self) -> model_admin_client::Result<Vec<ModelName>> {
            Ok(vec![ModelName::new("Course")])
        }

        async fn get_fields(
            &self,
            model: &ModelName,
        ) -> model_admin_client::Result<Vec<FieldDescriptor>> {
            if model.as_ref() == "Course" {
                Ok(vec![FieldDescriptor::new("title", FieldType::String, false)])
            } else {
                Err(unknown(model))
            }
        }

        async fn list_records(
            &self,
            model: &ModelName,
            page: u32,
            limit: u32,
        ) -> model_admin_client::Result<Page> {
            if model.as_ref() != "Course" {
                return Err(unknown(model));
            }
            Ok(Page {
                records: Vec::new(),
                total: 0,
                page,
                limit,
            })
        }

        async fn get_record(
            &self,
            model: &ModelName,
            _id: &RecordId,
        ) -> model_admin_client::Result<Record> {
            Err(unknown(model))
        }

        async fn create_record(
            &self,
            _model: &ModelName,
            payload: &Payload,
        ) -> model_admin_client::Result<Record> {
            Ok(Record::new(payload.clone()))
        }

        async fn update_record(
            &self,
            _model: &ModelName,
            _id: &RecordId,
            payload: &Payload,
        ) -> model_admin_client::Result<Record> {
            Ok(Record::new(payload.clone()))
        }

        async fn delete_record(
            &self,
            _model: &ModelName,
            _id: &RecordId,
        ) -> model_admin_client::Result<()> {
            Ok(())
        }
    }

    fn executor(runtime: &tokio::runtime::Runtime) -> (Executor, UnboundedReceiver<Outcome>) {
        let ctx = Arc::new(ServiceContext::new(Arc::new(StaticBackend)));
        Executor::new(Arc::new(Services::new(ctx)), runtime.handle().clone())
    }

    #[test]
    fn dispatch_sends_outcome_back() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (executor, mut rx) = executor(&runtime);

        executor.dispatch(Command::ListModels { seq: 7 });
        let outcome = rx.blocking_recv().unwrap();

        match outcome {
            Outcome::Models { seq, result } => {
                assert_eq!(seq, 7);
                assert_eq!(result.unwrap(), vec![ModelName::new("Course")]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn failures_come_back_as_outcomes() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (executor, mut rx) = executor(&runtime);
        let ticket = Ticket {
            seq: 3,
            model: ModelName::new("Missing"),
        };

        executor.dispatch(Command::FetchFields(ticket.clone()));
        let outcome = rx.blocking_recv().unwrap();

        match outcome {
            Outcome::Fields { ticket: got, result } => {
                assert_eq!(got, ticket);
                assert!(result.unwrap_err().is_not_found());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
