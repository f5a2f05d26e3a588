use crate::model::reservation::{NewReservation, Reservation};
use serde::{Deserialize, Serialize};

use validator::Validate;

/// `date_rdv` / `heure_rdv` are the field names used by the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(required)]
    pub client_name: Option<String>,

    #[validate(required)]
    pub client_email: Option<String>,

    pub client_phone: Option<String>,

    #[validate(required)]
    pub service_type: Option<String>,

    #[serde(alias = "date_rdv")]
    #[validate(required)]
    pub date: Option<String>,

    #[serde(alias = "heure_rdv")]
    #[validate(required)]
    pub time: Option<String>,

    pub description: Option<String>,
}

impl CreateReservationRequest {
    pub fn into_new_reservation(self) -> NewReservation {
        NewReservation {
            client_name: self.client_name.unwrap_or_default(),
            client_email: self.client_email.unwrap_or_default(),
            client_phone: self.client_phone.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Body returned by `POST /api/reservations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationReceipt {
    pub success: bool,
    pub reservation_id: String,
    pub message: String,
}

impl From<&Reservation> for ReservationReceipt {
    fn from(reservation: &Reservation) -> Self {
        ReservationReceipt {
            success: true,
            reservation_id: reservation.id.clone(),
            message: format!(
                "Réservation #{} confirmée pour le {} à {}",
                reservation.id, reservation.date, reservation.time
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::payload::RecordPayload;

    #[test]
    fn test_form_aliases() {
        let request: CreateReservationRequest = RecordPayload::from_form(
            b"client_name=A&client_email=a%40b.com&service_type=reparation&date_rdv=2025-09-01&heure_rdv=09%3A00",
        )
        .unwrap()
        .into_request()
        .unwrap();
        let reservation = request.into_new_reservation();
        assert_eq!(reservation.date, "2025-09-01");
        assert_eq!(reservation.time, "09:00");
    }

    #[test]
    fn test_missing_date_and_time() {
        let err = RecordPayload::from_form(b"client_name=A&client_email=a%40b.com&service_type=reparation")
            .unwrap()
            .into_request::<CreateReservationRequest>()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Missing required field: date"));
        assert!(message.contains("Missing required field: time"));
    }
}
