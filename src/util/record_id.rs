use uuid::Uuid;

/// Length of every quote, reservation and invoice identifier.
pub const RECORD_ID_LEN: usize = 8;

/// Short opaque identifier: the leading hex digits of a random UUID.
pub fn generate_record_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(RECORD_ID_LEN);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = generate_record_id();
        assert_eq!(id.len(), RECORD_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ids_differ() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_record_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
