pub mod confirmation_view;
pub mod loading_indicator;
pub mod payment_step;
pub mod status_line;

pub use confirmation_view::*;
pub use loading_indicator::*;
pub use payment_step::*;
pub use status_line::*;
