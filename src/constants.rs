pub mod header {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod mime {
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
}
