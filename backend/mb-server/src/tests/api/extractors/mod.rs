mod auth_token;
