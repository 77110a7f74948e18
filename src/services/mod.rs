pub mod exam_service;
pub mod gemini_service;
pub mod model;
pub mod normalizer;
