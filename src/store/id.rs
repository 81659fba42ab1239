//! Todo Id Generation
//!
//! Ids are a base-36 millisecond timestamp followed by a short random
//! base-36 suffix.

use crate::config::ID_SUFFIX_LEN;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh id
pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u128;
    let mut id = to_base36(millis);
    id.push_str(&random_suffix(ID_SUFFIX_LEN));
    id
}

fn random_suffix(len: usize) -> String {
    let mut bits = uuid::Uuid::new_v4().as_u128();
    (0..len)
        .map(|_| {
            let c = BASE36[(bits % 36) as usize] as char;
            bits /= 36;
            c
        })
        .collect()
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
