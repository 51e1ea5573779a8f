pub mod checkbox_input;
pub mod choice_select;
pub mod validated_input;
pub mod validation_feedback;

pub use checkbox_input::*;
pub use choice_select::*;
pub use validated_input::*;
pub use validation_feedback::*;
