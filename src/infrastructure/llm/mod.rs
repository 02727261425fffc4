mod gemini_client;
mod mock_generative_model;

pub use gemini_client::{GEMINI_BASE_URL, GeminiClient};
pub use mock_generative_model::{MockGenerativeModel, SCAFFOLD_TASK_JSON};
