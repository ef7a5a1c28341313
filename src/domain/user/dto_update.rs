/// Partial profile update. `Some` overwrites the column, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub first_name_ua: Option<String>,
    pub last_name: Option<String>,
    pub last_name_ua: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub resume: Option<String>,
    pub english_level: Option<String>,
    pub ukraine_langue: Option<String>,
    pub russian_langue: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ua: Option<String>,
    pub telegram: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub viber: Option<String>,
    pub whatsapp: Option<String>,
    pub consent_of_use: Option<bool>,
    pub site_resume: Option<String>,
    pub color_schema: Option<String>,
    pub sample: Option<String>,
}
