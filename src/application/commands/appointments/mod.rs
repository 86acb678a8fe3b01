mod book;
mod service;

pub use book::BookAppointmentCommand;
pub use service::AppointmentCommandService;
