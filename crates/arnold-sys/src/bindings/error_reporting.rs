use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct ErrorReportingApi => error_reporting {
        fn AiErrorReportingSetEnabled(value: bool);
        fn AiErrorReportingGetEnabled() -> bool;
        fn AiErrorReportingSetAutosendEmail(email: AtString);
        fn AiErrorReportingGetAutosendEmail() -> AtStringReturn;
    }
}
