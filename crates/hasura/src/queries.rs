//! GraphQL documents posted to the Hasura endpoint.

pub const CREATE_APPOINTMENT_MUTATION: &str = r#"
  mutation CreateAppointment($patient_id: uuid!, $schedule_to: timestamptz!, $status: String!) {
    insert_appointment_one(object: {
      patient_id: $patient_id,
      schedule_to: $schedule_to,
      status: $status
    }) {
      id
      patient_id
      schedule_to
      status
      created_at
    }
  }
"#;

pub const GET_SCHEDULED_APPOINTMENTS_QUERY: &str = r#"
  query GetScheduledAppointments {
    appointment(where: {status: {_eq: "scheduled"}}) {
      id
      patient_id
      schedule_to
      status
      created_at
    }
  }
"#;
