use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

fn emit<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"api_version":"{}","error":"failed to encode response: {}"}}"#,
            env!("CARGO_PKG_VERSION"),
            e
        )
    })
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", emit(&response));
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(ListResponse { items, count });
}

/// Print an error envelope to stderr and exit with status 1
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", emit(&response));
    std::process::exit(1);
}
