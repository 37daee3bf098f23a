pub mod submittable_status;

pub use submittable_status::SubmittableStatus;
