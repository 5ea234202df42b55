use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("GraphQL operation failed: {0}")]
    GraphQLOperation(#[from] eyre::Report),

    #[error("Failed to create appointment: {0}")]
    CreateAppointment(#[source] Box<BookingError>),

    #[error("Failed to fetch scheduled appointments: {0}")]
    FetchAppointments(#[source] Box<BookingError>),
}

pub type BookingResult<T> = Result<T, BookingError>;
