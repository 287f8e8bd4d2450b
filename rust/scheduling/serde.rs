use crate::json::JSON;
use crate::scheduling::{Cal, HolidaySet, HolidayYears};

impl JSON for Cal {}
impl JSON for HolidaySet {}
impl JSON for HolidayYears {}
