//! The programs themselves. Each one only decides what happens on input and
//! what a frame looks like, `app::run` does the rest.

pub mod background;
pub mod composition;
pub mod forms;
pub mod primitives;

pub use background::BackgroundPainter;
pub use composition::TransformPlayground;
pub use forms::FormGallery;
pub use primitives::PrimitivePicker;
