mod password_login;
