pub const DEFAULT_API_URL: &str = "http://worldclockapi.com/api/json/utc/now";

pub const DEFAULT_USER_AGENT: &str = "yearnow";

/// Field of the world clock response that carries the date string.
pub const CURRENT_DATE_TIME_KEY: &str = "currentDateTime";

pub const ENV_PREFIX: &str = "YEARNOW";
