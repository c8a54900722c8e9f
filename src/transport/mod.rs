//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod envelope;
mod keywords;
mod operator_lookup;
mod send_sms;

pub use account::{decode_balance_success, decode_prices_success};
pub use envelope::{Envelope, decode_envelope, is_json_content_type};
pub use keywords::encode_create_keyword_form;
pub use operator_lookup::{decode_operator_lookup_success, encode_operator_lookup_query};
pub use send_sms::{decode_send_sms_success, encode_send_sms_form};
