pub trait ReportStore {
    fn write_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String>;
}
