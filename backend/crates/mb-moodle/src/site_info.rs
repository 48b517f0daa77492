use mb_core::UserProfile;

use serde::Deserialize;

/// The fields of `core_webservice_get_site_info` this service reads
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub userid: i64,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub useremail: Option<String>,
    #[serde(default)]
    pub userpictureurl: Option<String>,
}

impl From<SiteInfo> for UserProfile {
    fn from(info: SiteInfo) -> Self {
        UserProfile {
            id: info.userid,
            full_name: info.fullname,
            email: info.useremail.filter(|e| !e.trim().is_empty()),
            avatar_url: info.userpictureurl.filter(|u| !u.trim().is_empty()),
        }
    }
}
