use crate::domain::model::{Package, RawValue};
use crate::domain::ports::PackageSource;
use crate::utils::error::Result;

/// The reference sensor batch used when no packages file is given.
///
/// The cycling entry carries `"trial"` on purpose: it is taken literally and
/// falls into the classic coefficient branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePackages;

impl PackageSource for SamplePackages {
    fn packages(&self) -> Result<Vec<Package>> {
        Ok(vec![
            Package::new(
                "SWM",
                vec![
                    RawValue::Int(720),
                    RawValue::Int(1),
                    RawValue::Int(80),
                    RawValue::Int(25),
                    RawValue::Int(40),
                ],
            ),
            Package::new(
                "RUN",
                vec![RawValue::Int(15000), RawValue::Int(1), RawValue::Int(75)],
            ),
            Package::new(
                "WLK",
                vec![
                    RawValue::Int(9000),
                    RawValue::Int(1),
                    RawValue::Int(75),
                    RawValue::Int(180),
                ],
            ),
            Package::new(
                "CYC",
                vec![
                    RawValue::Int(10000),
                    RawValue::Int(1),
                    RawValue::Int(75),
                    RawValue::from("trial"),
                ],
            ),
        ])
    }
}
