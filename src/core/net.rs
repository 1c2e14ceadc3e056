/// Read the response body as text, mapping a non-2xx status to `DeskError::Status`.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, crate::core::DeskError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(crate::core::DeskError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
