//! Static datasets backing the dashboard, verification, and admin screens.
//!
//! DESIGN
//! ======
//! The platform's supplier and metrics data is presentation-only mock
//! content; only auth and document storage talk to a real service. Keeping
//! the datasets here as plain values lets every page share one source
//! without a fetch layer.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// Supply-chain position of a supplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplierTier {
    Primary,
    Secondary,
    Tertiary,
}

impl SupplierTier {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
        }
    }
}

/// Verification state of a supplier's sustainability claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    Pending,
    Expired,
}

impl VerificationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
            Self::Expired => "Expired",
        }
    }

    /// Class-name fragment for the badge component.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Expired => "expired",
        }
    }
}

/// One supplier in the verification program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Supplier {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub tier: SupplierTier,
    pub last_verified: &'static str,
    pub verification_status: VerificationStatus,
    pub sustainability_score: u8,
    pub certifications: &'static [&'static str],
    pub category: &'static str,
}

/// Direction of a metric between reporting periods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricTrend {
    Up,
    Down,
    Stable,
}

/// One tracked sustainability metric with its reduction/growth target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SustainabilityMetric {
    pub id: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub trend: MetricTrend,
    pub change: f64,
    pub target: f64,
    pub period_label: &'static str,
    /// Whether a falling value is the desirable direction (emissions,
    /// water) as opposed to a rising one (renewables, diversion).
    pub lower_is_better: bool,
}

impl SustainabilityMetric {
    /// Progress toward the target, clamped to 0–100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        let ratio = if self.lower_is_better {
            self.target / self.value.max(f64::MIN_POSITIVE)
        } else {
            self.value / self.target
        };
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    /// Whether the latest movement is in the desirable direction.
    #[must_use]
    pub fn trend_is_favorable(&self) -> bool {
        match self.trend {
            MetricTrend::Up => !self.lower_is_better,
            MetricTrend::Down => self.lower_is_better,
            MetricTrend::Stable => true,
        }
    }
}

/// Lifecycle state of a verification activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Scheduled,
}

impl ActivityStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::InProgress, Self::Scheduled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Scheduled => "Scheduled",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Scheduled => "scheduled",
        }
    }
}

/// Kind of verification activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityType {
    Audit,
    Certification,
    Report,
    Update,
}

impl ActivityType {
    pub const ALL: [Self; 4] = [Self::Audit, Self::Certification, Self::Report, Self::Update];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Audit => "Audit",
            Self::Certification => "Certification",
            Self::Report => "Report",
            Self::Update => "Update",
        }
    }
}

/// One entry in the verification activity feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationActivity {
    pub id: &'static str,
    pub supplier: &'static str,
    pub activity: &'static str,
    pub date: &'static str,
    pub status: ActivityStatus,
    pub kind: ActivityType,
}

/// Aggregate program performance shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceSummary {
    pub overall_score: u8,
    pub supplier_compliance: u8,
    pub verified_claims: u8,
    pub improvement_rate: f64,
    pub risk_level: &'static str,
    pub top_performer: &'static str,
    pub improvement_areas: &'static [&'static str],
    pub recent_milestones: &'static [&'static str],
}

/// Kind of in-app notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Verification,
    Document,
    System,
}

impl NotificationKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Verification => "Verification",
            Self::Document => "Document",
            Self::System => "System",
        }
    }
}

/// One entry in the notification feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub time: &'static str,
    pub kind: NotificationKind,
    pub read: bool,
}

/// Sample suppliers.
#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1",
            name: "EcoHarvest Materials",
            location: "Portland, OR",
            tier: SupplierTier::Primary,
            last_verified: "2023-11-15",
            verification_status: VerificationStatus::Verified,
            sustainability_score: 92,
            certifications: &["B Corp", "FSC", "Carbon Neutral"],
            category: "Raw Materials",
        },
        Supplier {
            id: "2",
            name: "GreenTech Manufacturing",
            location: "Austin, TX",
            tier: SupplierTier::Primary,
            last_verified: "2023-10-22",
            verification_status: VerificationStatus::Verified,
            sustainability_score: 87,
            certifications: &["ISO 14001", "Green-e", "Fair Trade"],
            category: "Manufacturing",
        },
        Supplier {
            id: "3",
            name: "Circular Packaging Co.",
            location: "Minneapolis, MN",
            tier: SupplierTier::Secondary,
            last_verified: "2023-09-30",
            verification_status: VerificationStatus::Verified,
            sustainability_score: 85,
            certifications: &["Cradle to Cradle", "EcoLogo"],
            category: "Packaging",
        },
        Supplier {
            id: "4",
            name: "Sustainable Logistics",
            location: "Seattle, WA",
            tier: SupplierTier::Primary,
            last_verified: "2023-12-01",
            verification_status: VerificationStatus::Pending,
            sustainability_score: 78,
            certifications: &["SmartWay", "ISO 14001"],
            category: "Logistics",
        },
        Supplier {
            id: "5",
            name: "Pure Elements Processors",
            location: "Denver, CO",
            tier: SupplierTier::Secondary,
            last_verified: "2023-08-15",
            verification_status: VerificationStatus::Expired,
            sustainability_score: 72,
            certifications: &["Organic", "Non-GMO"],
            category: "Processing",
        },
        Supplier {
            id: "6",
            name: "EthicalSource Textiles",
            location: "New York, NY",
            tier: SupplierTier::Primary,
            last_verified: "2023-11-05",
            verification_status: VerificationStatus::Verified,
            sustainability_score: 89,
            certifications: &["GOTS", "Fair Trade", "OEKO-TEX"],
            category: "Textiles",
        },
    ]
}

/// Look up a supplier by id.
#[must_use]
pub fn supplier_by_id(id: &str) -> Option<Supplier> {
    suppliers().into_iter().find(|s| s.id == id)
}

/// Sample sustainability metrics.
#[must_use]
pub fn sustainability_metrics() -> Vec<SustainabilityMetric> {
    vec![
        SustainabilityMetric {
            id: "1",
            name: "Carbon Footprint",
            value: 1_842.0,
            unit: "tons CO2e",
            trend: MetricTrend::Down,
            change: 12.4,
            target: 1_500.0,
            period_label: "FY 2023",
            lower_is_better: true,
        },
        SustainabilityMetric {
            id: "2",
            name: "Water Usage",
            value: 3_750.0,
            unit: "kiloliters",
            trend: MetricTrend::Down,
            change: 8.2,
            target: 3_200.0,
            period_label: "Q4 2023",
            lower_is_better: true,
        },
        SustainabilityMetric {
            id: "3",
            name: "Renewable Energy",
            value: 68.0,
            unit: "%",
            trend: MetricTrend::Up,
            change: 15.3,
            target: 85.0,
            period_label: "YTD",
            lower_is_better: false,
        },
        SustainabilityMetric {
            id: "4",
            name: "Waste Diverted",
            value: 92.0,
            unit: "%",
            trend: MetricTrend::Up,
            change: 5.7,
            target: 95.0,
            period_label: "Q4 2023",
            lower_is_better: false,
        },
        SustainabilityMetric {
            id: "5",
            name: "Ethical Compliance",
            value: 97.0,
            unit: "%",
            trend: MetricTrend::Stable,
            change: 0.5,
            target: 100.0,
            period_label: "YTD",
            lower_is_better: false,
        },
        SustainabilityMetric {
            id: "6",
            name: "Circular Materials",
            value: 72.0,
            unit: "%",
            trend: MetricTrend::Up,
            change: 18.2,
            target: 85.0,
            period_label: "FY 2023",
            lower_is_better: false,
        },
    ]
}

/// Sample verification activities, newest scheduled work first.
#[must_use]
pub fn verification_activities() -> Vec<VerificationActivity> {
    vec![
        VerificationActivity {
            id: "1",
            supplier: "EcoHarvest Materials",
            activity: "Annual Sustainability Audit",
            date: "2023-11-15",
            status: ActivityStatus::Completed,
            kind: ActivityType::Audit,
        },
        VerificationActivity {
            id: "2",
            supplier: "GreenTech Manufacturing",
            activity: "ISO 14001 Certification Renewal",
            date: "2023-12-10",
            status: ActivityStatus::Scheduled,
            kind: ActivityType::Certification,
        },
        VerificationActivity {
            id: "3",
            supplier: "Circular Packaging Co.",
            activity: "Quarterly GHG Emissions Report",
            date: "2023-10-30",
            status: ActivityStatus::Completed,
            kind: ActivityType::Report,
        },
        VerificationActivity {
            id: "4",
            supplier: "Sustainable Logistics",
            activity: "Supply Chain Ethics Verification",
            date: "2023-12-03",
            status: ActivityStatus::InProgress,
            kind: ActivityType::Audit,
        },
        VerificationActivity {
            id: "5",
            supplier: "Pure Elements Processors",
            activity: "Supplier Documentation Update",
            date: "2023-11-28",
            status: ActivityStatus::InProgress,
            kind: ActivityType::Update,
        },
    ]
}

/// Program performance summary.
#[must_use]
pub fn performance_summary() -> PerformanceSummary {
    PerformanceSummary {
        overall_score: 84,
        supplier_compliance: 91,
        verified_claims: 78,
        improvement_rate: 12.5,
        risk_level: "Low",
        top_performer: "EcoHarvest Materials",
        improvement_areas: &["Scope 3 Emissions", "Supplier Diversity", "Material Traceability"],
        recent_milestones: &[
            "Achieved 75% renewable energy",
            "Reduced water usage by 8%",
            "Onboarded 12 new verified suppliers",
        ],
    }
}

/// Seed notification feed.
#[must_use]
pub fn notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: "1",
            title: "Verification completed",
            body: "EcoHarvest Materials passed its annual sustainability audit",
            time: "2 hours ago",
            kind: NotificationKind::Verification,
            read: false,
        },
        NotificationItem {
            id: "2",
            title: "Certification expiring",
            body: "Pure Elements Processors' Organic certification expired on Aug 15",
            time: "1 day ago",
            kind: NotificationKind::Verification,
            read: false,
        },
        NotificationItem {
            id: "3",
            title: "Document uploaded",
            body: "Q4 GHG emissions report added to verification documents",
            time: "2 days ago",
            kind: NotificationKind::Document,
            read: true,
        },
        NotificationItem {
            id: "4",
            title: "Audit scheduled",
            body: "ISO 14001 renewal audit for GreenTech Manufacturing set for Dec 10",
            time: "3 days ago",
            kind: NotificationKind::Verification,
            read: true,
        },
        NotificationItem {
            id: "5",
            title: "Weekly summary ready",
            body: "Your supply chain sustainability digest for last week is available",
            time: "6 days ago",
            kind: NotificationKind::System,
            read: true,
        },
    ]
}
