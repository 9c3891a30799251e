pub mod readout;
pub mod slider;

pub use readout::DragReadout;
pub use slider::Slider;
