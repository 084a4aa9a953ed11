pub static STATUS_SUCCESS: &str = "success";
pub static STATUS_ERROR: &str = "error";

pub static MESSAGE_PLAYER_ID_REQUIRED: &str = "Player ID is required";
pub static MESSAGE_UID_REQUIRED: &str = "Player UID is required";
pub static MESSAGE_INVALID_ACTION: &str = "Invalid action";

pub static MESSAGE_PLAYER_INFO_OK: &str = "Player information retrieved successfully";
pub static MESSAGE_PLAYER_INFO_FALLBACK: &str = "Player information retrieved successfully (ariflexlabs fallback)";
pub static MESSAGE_PLAYER_INFO_LIMITED: &str = "Basic player information retrieved (shop2game fallback)";
pub static MESSAGE_CALLBACK_OK: &str = "Player information processed successfully from callback data";

pub static MESSAGE_LIKES_OK: &str = "Likes sent successfully";
pub static MESSAGE_VISITS_OK: &str = "Visits sent successfully";
pub static MESSAGE_VISITS_BD_ONLY: &str = "Visit sender only supports Bangladesh (BD) server";

pub static MESSAGE_SENSITIVITY_OK: &str = "Sensitivity calculated successfully";
pub static MESSAGE_SENSITIVITY_PARAMS: &str = "Missing required parameters: oldSens, oldDpi, newDpi";

pub static MESSAGE_NO_FILES: &str = "No files uploaded";
pub static MESSAGE_NO_VALID_GUEST_DATA: &str = "No valid data found in the uploaded files";

pub static MESSAGE_UPSTREAM_FETCH_FAILED: &str = "Failed to fetch data from server";
pub static MESSAGE_UNAUTHORIZED: &str = "Unauthorized";
pub static MESSAGE_ACCESS_DENIED: &str = "Access denied";
pub static MESSAGE_USERS_FETCH_FAILED: &str = "Failed to fetch users";
pub static MESSAGE_LOGS_FETCH_FAILED: &str = "Failed to fetch logs";

pub static MESSAGE_MALFORMED_PAYLOAD: &str = "malformed request payload";
pub static MESSAGE_NOT_FOUND: &str = "resource not found";
pub static MESSAGE_TOO_MANY_REQUESTS: &str = "too many requests, slow down";
pub static MESSAGE_INTERNAL_SERVER_ERROR: &str = "internal server error";

pub static CREDITS_DEFAULT: &str = "TEAM-AKIRU";
pub static CREDITS_ARIFLEX: &str = "Credits: @ariflexlabs";
pub static CREDITS_CALLBACK: &str = "Credits: @ariflexlabs Developer @Uncle_chips";
pub static CREDITS_SHOP2GAME: &str = "Data provided by shop2game.com (limited information)";

pub static LOG_ACTION_API_CALL: &str = "api_call";
pub static LOG_ACTION_VIEW_USERS: &str = "admin_view_users";
pub static LOG_ACTION_VIEW_LOGS: &str = "admin_view_logs";
