pub mod controls;
pub mod dispatch;
pub mod intent;
pub mod matrix;
pub mod risks;
pub mod vocabulary;
