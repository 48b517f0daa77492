mod consent_url;
