//! 测试辅助：模拟后端，同步回答控制器发出的命令

use model_admin_client::{
    ClientError, FieldDescriptor, FieldType, ModelName, Page, Record, CREATED_AT_FIELD, ID_FIELD,
    UPDATED_AT_FIELD,
};
use model_admin_core::controller::MutationKind;
use model_admin_core::{Command, CoreError, Outcome, ViewController, ViewSettings};
use serde_json::{json, Value};

use crate::message::{AppMessage, NavigationMessage};
use crate::model::App;
use crate::update::update;

/// `Course` 的字段（`Lesson` 只有 id 与 name）
pub fn course_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(ID_FIELD, FieldType::Int, false),
        FieldDescriptor::new("title", FieldType::String, false),
        FieldDescriptor::new("description", FieldType::String, true),
        FieldDescriptor::new("published", FieldType::Boolean, false),
        FieldDescriptor::new("price", FieldType::Float, true),
        FieldDescriptor::new("starts_at", FieldType::Datetime, true),
        FieldDescriptor::new(CREATED_AT_FIELD, FieldType::Datetime, false),
        FieldDescriptor::new(UPDATED_AT_FIELD, FieldType::Datetime, false),
    ]
}

fn lesson_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(ID_FIELD, FieldType::Int, false),
        FieldDescriptor::new("name", FieldType::String, false),
    ]
}

fn course(id: i64) -> Record {
    let value = json!({
        "id": id,
        "title": format!("Course {id}"),
        "description": null,
        "published": id % 2 == 0,
        "price": 9.5,
        "starts_at": null,
        "created_at": "2024-03-01T08:00:00.000Z",
        "updated_at": "2024-03-01T08:00:00.000Z",
    });
    match value {
        Value::Object(fields) => Record::new(fields),
        _ => Record::default(),
    }
}

/// 内存中的后端
pub struct Fixture {
    pub courses: Vec<Record>,
    next_id: i64,
    /// 之后的列表请求全部失败
    pub fail_pages: bool,
}

impl Fixture {
    pub fn with_courses(count: i64) -> Self {
        Self {
            courses: (1..=count).map(course).collect(),
            next_id: count + 1,
            fail_pages: false,
        }
    }

    fn records_of(&self, model: &ModelName) -> &[Record] {
        if model.as_ref() == "Course" {
            &self.courses
        } else {
            &[]
        }
    }

    fn position(&self, id: &model_admin_client::RecordId) -> Option<usize> {
        self.courses.iter().position(|r| r.id().as_ref() == Some(id))
    }

    pub fn answer(&mut self, command: Command) -> Outcome {
        match command {
            Command::ListModels { seq } => Outcome::Models {
                seq,
                result: Ok(vec![ModelName::new("Course"), ModelName::new("Lesson")]),
            },
            Command::FetchFields(ticket) => {
                let fields = if ticket.model.as_ref() == "Course" {
                    course_fields()
                } else {
                    lesson_fields()
                };
                Outcome::Fields {
                    ticket,
                    result: Ok(fields),
                }
            }
            Command::FetchPage { ticket, request } => {
                if self.fail_pages {
                    return Outcome::Page {
                        ticket,
                        request,
                        result: Err(CoreError::Client(ClientError::Network {
                            detail: "connection refused".to_string(),
                        })),
                    };
                }
                let records = self.records_of(&ticket.model);
                let start = (request.page.max(1) - 1) as usize * request.limit as usize;
                let page = Page {
                    records: records
                        .iter()
                        .skip(start)
                        .take(request.limit as usize)
                        .cloned()
                        .collect(),
                    total: records.len() as u64,
                    page: request.page,
                    limit: request.limit,
                };
                Outcome::Page {
                    ticket,
                    request,
                    result: Ok(page),
                }
            }
            Command::FetchRecord { ticket, id } => {
                let result = self
                    .records_of(&ticket.model)
                    .iter()
                    .find(|r| r.id().as_ref() == Some(&id))
                    .cloned()
                    .ok_or_else(|| CoreError::RecordNotFound(format!("{}/{id}", ticket.model)));
                Outcome::Record { ticket, id, result }
            }
            Command::CreateRecord { ticket, payload } => {
                let mut fields = payload;
                fields.insert(ID_FIELD.to_string(), json!(self.next_id));
                self.next_id += 1;
                self.courses.push(Record::new(fields));
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Create,
                    result: Ok(()),
                }
            }
            Command::UpdateRecord {
                ticket,
                id,
                payload,
            } => {
                let result = match self.position(&id) {
                    Some(index) => {
                        let mut fields = self.courses[index].clone().into_fields();
                        fields.extend(payload);
                        self.courses[index] = Record::new(fields);
                        Ok(())
                    }
                    None => Err(CoreError::RecordNotFound(format!("{}/{id}", ticket.model))),
                };
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Update,
                    result,
                }
            }
            Command::DeleteRecord { ticket, id } => {
                let result = match self.position(&id) {
                    Some(index) => {
                        self.courses.remove(index);
                        Ok(())
                    }
                    None => Err(CoreError::RecordNotFound(format!("{}/{id}", ticket.model))),
                };
                Outcome::Mutation {
                    ticket,
                    kind: MutationKind::Delete,
                    result,
                }
            }
        }
    }
}

/// 反复派发待执行命令并回灌结果，直到没有新命令
pub fn settle(app: &mut App, fixture: &mut Fixture) {
    for _ in 0..16 {
        let commands = app.take_commands();
        if commands.is_empty() {
            return;
        }
        for command in commands {
            let outcome = fixture.answer(command);
            update(app, AppMessage::Backend(outcome));
        }
    }
}

/// 已加载模型目录并打开 `Course` 的应用
pub fn ready(courses: i64) -> (App, Fixture) {
    let mut app = App::new(ViewController::new(ViewSettings::default()), "test");
    let mut fixture = Fixture::with_courses(courses);

    update(&mut app, AppMessage::Activate);
    settle(&mut app, &mut fixture);
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
    settle(&mut app, &mut fixture);

    (app, fixture)
}

pub fn ready_app(courses: i64) -> App {
    ready(courses).0
}
