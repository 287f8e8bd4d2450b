use crate::deadline::{CountingMode, DeadlineRequest, DeadlineResult};
use crate::json::JSON;

impl JSON for CountingMode {}
impl JSON for DeadlineRequest {}
impl JSON for DeadlineResult {}
