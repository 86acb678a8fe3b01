pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod patients;
pub mod stories;

pub use appointments::AppointmentDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use doctors::DoctorDto;
pub use patients::PatientDto;
pub use stories::{
    ANONYMOUS_AUTHOR_EMAIL, ANONYMOUS_AUTHOR_NAME, AnonymizedStoryDto, CommentDto,
    StoryAuthorView, StoryDto,
};
