pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Appointment, NewAppointment};
pub use repository::AppointmentRepository;
pub use value_objects::{AppointmentId, TimeSlot};
