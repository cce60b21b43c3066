use serde::{Deserialize, Serialize};

/// 성능 저하율에 따른 상태 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerformanceStatus {
    Good,
    Moderate,
    Caution,
    Severe,
}

impl PerformanceStatus {
    /// 저하율(%)을 높은 구간부터 비교한다. 각 구간의 하한은 포함한다.
    pub fn classify(drop_pct: f64) -> Self {
        if drop_pct >= 40.0 {
            PerformanceStatus::Severe
        } else if drop_pct >= 20.0 {
            PerformanceStatus::Caution
        } else if drop_pct >= 10.0 {
            PerformanceStatus::Moderate
        } else {
            PerformanceStatus::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::Severe => "심각",
            PerformanceStatus::Caution => "주의",
            PerformanceStatus::Moderate => "보통",
            PerformanceStatus::Good => "양호",
        }
    }
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
