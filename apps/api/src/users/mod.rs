// User provisioning on behalf of the external identity layer.
// Credential checks and token issuance live upstream; this service only
// stores accounts and trusts the user_id each core request carries.

pub mod handlers;
