// thirtyfour (selenium) inputs
pub const BASE_URL: &str = "https://bookings.ok.ubc.ca/studyrooms/";
pub const EDIT_ENTRY_PATH: &str = "edit_entry.php";
pub const DAY_VIEW_PATH: &str = "index.php";

pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 600;

// URL markers of the single sign-on hops
pub const IDENTITY_PROVIDER_MARKER: &str = "authentication.ubc.ca";
pub const TWO_FACTOR_MARKER: &str = "duosecurity.com";

// Login flow selectors
pub const LOGIN_BUTTON_XPATH: &str = "//input[@value='Log in']";
pub const USERNAME_INPUT_ID: &str = "username";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const SUBMIT_BUTTON_XPATH: &str = "//button[@type='submit']";
pub const LOGIN_ERROR_CLASS: &str = "login_error";
pub const TRUST_BROWSER_BUTTON_ID: &str = "trust-browser-button";

// IDS of reservation form fields
pub const NAME_INPUT_ID: &str = "name";
pub const DESCRIPTION_INPUT_ID: &str = "description";
pub const TYPE_SELECT_ID: &str = "type";
pub const PHONE_INPUT_ID: &str = "f_phone";
pub const EMAIL_INPUT_ID: &str = "f_email";
pub const SUBMIT_CLASS: &str = "default_action";

// Booking type "W" is the only one students may create
pub const ROOM_TYPE_VALUE: &str = "W";

// Client side validation indicators, text lives in the title attribute
pub const CONFLICT_CHECK_ID: &str = "conflict_check";
pub const POLICY_CHECK_ID: &str = "policy_check";
pub const STATUS_ATTRIBUTE: &str = "title";

pub const NO_CONFLICTS: &str = "No scheduling conflicts";
pub const NO_POLICY_CONFLICTS: &str = "No policy conflicts";
pub const LIMIT_MARKERS: [&str; 2] = ["maximum", "3 weeks"];

pub const SESSION_CAP_SECS: u32 = 7200;
pub const MAX_ROOMS_BOOKED: u32 = 3;

// Element ids the debug console can inspect by name
pub const ELEMENT_IDS: [&str; 10] = [
    USERNAME_INPUT_ID,
    PASSWORD_INPUT_ID,
    TRUST_BROWSER_BUTTON_ID,
    NAME_INPUT_ID,
    DESCRIPTION_INPUT_ID,
    TYPE_SELECT_ID,
    PHONE_INPUT_ID,
    EMAIL_INPUT_ID,
    CONFLICT_CHECK_ID,
    POLICY_CHECK_ID,
];

pub fn element_id(name: &str) -> Option<&'static str> {
    ELEMENT_IDS.iter().copied().find(|id| *id == name)
}
