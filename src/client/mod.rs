pub mod exam_client;

pub use exam_client::{ClientError, ExamBackend, ExamClient};
