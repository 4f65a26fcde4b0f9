pub mod view;

pub use view::EducationView;
