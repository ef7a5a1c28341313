#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub email: String,
    /// Already hashed; repositories never see the plain password
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_agreement: bool,
}
