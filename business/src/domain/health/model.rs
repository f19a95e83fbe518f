/// Liveness of the service and of each collaborator it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub service: bool,
    pub catalog: bool,
    pub cache: bool,
}

impl HealthReport {
    pub fn all_alive(&self) -> bool {
        self.service && self.catalog && self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_all_alive_only_when_every_flag_set() {
        let healthy = HealthReport {
            service: true,
            catalog: true,
            cache: true,
        };
        let degraded = HealthReport {
            cache: false,
            ..healthy
        };

        assert!(healthy.all_alive());
        assert!(!degraded.all_alive());
    }
}
