//! Configuration management for the apple farm simulator
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (the illustrative reference scenario)
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::{
    validate_count, validate_fraction, validate_grade_fractions, validate_non_negative,
};
use shared::WeatherSnapshot;

use crate::error::{FarmError, FarmResult};

/// Main simulator configuration, grouped by chain stage
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    pub nursery: NurseryConfig,
    pub orchard: OrchardConfig,
    pub harvesting: HarvestConfig,
    pub processing: ProcessingConfig,
    pub distribution: DistributionConfig,
    pub weather: WeatherConfig,
}

/// Aggregate configuration for the nursery group
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NurseryConfig {
    pub rootstock: RootstockConfig,
    pub propagation: PropagationConfig,
    pub grafting: GraftingConfig,
    pub quality: QualityControlConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RootstockConfig {
    pub target_trees: i64,
    pub cost_per_tree: Decimal,
    /// Risk factor above this threshold scales procurement back
    pub weather_risk_threshold: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PropagationConfig {
    pub irrigation_cost_per_tree: Decimal,
    pub mulch_cost_per_tree: Decimal,
    pub survival_rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraftingConfig {
    pub cultivar_name: String,
    pub labour_cost_per_tree: Decimal,
    pub pruning_cost_per_tree: Decimal,
    pub success_rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QualityControlConfig {
    /// Minimum accepted tree count for the batch to pass inspection
    pub min_trees: i64,
    pub rejection_rate: Decimal,
}

/// Aggregate configuration for the orchard group
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrchardConfig {
    pub planting: PlantingConfig,
    pub management: ManagementConfig,
    pub production: ProductionConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlantingConfig {
    pub land_prep_cost_per_tree: Decimal,
    pub scaffolding_cost_per_tree: Decimal,
    pub density_factor: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ManagementConfig {
    pub annual_pruning_cost_per_tree: Decimal,
    pub fertiliser_cost_per_tree: Decimal,
    pub spray_cost_per_tree: Decimal,
    pub weather_modifier: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductionConfig {
    /// Years before a block starts fruiting
    pub juvenile_period_years: i32,
    pub mature_yield_per_tree: Decimal,
    pub weather_yield_modifier: Decimal,
}

/// Aggregate configuration for the harvesting group
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HarvestConfig {
    pub picking: PickingConfig,
    pub storage: StorageConfig,
    pub grading: GradingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PickingConfig {
    pub field_grading_efficiency: Decimal,
    pub time_to_harvest_days: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub storage_capacity_kg: Decimal,
    pub daily_decay_rate: Decimal,
    pub storage_days: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GradingConfig {
    pub dessert_fraction: Decimal,
    pub cooking_fraction: Decimal,
    pub cider_fraction: Decimal,
    pub juice_fraction: Decimal,
    pub processing_loss_fraction: Decimal,
}

/// Aggregate configuration for the processing branches
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessingConfig {
    pub fresh: FreshProcessingConfig,
    pub cider: CiderProcessingConfig,
    pub juice: JuiceProcessingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FreshProcessingConfig {
    pub washing_loss_fraction: Decimal,
    pub waxing_cost_per_kg: Decimal,
    pub packing_cost_per_kg: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CiderProcessingConfig {
    pub pressing_yield: Decimal,
    pub fermentation_loss_fraction: Decimal,
    pub bottling_efficiency: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JuiceProcessingConfig {
    pub pressing_yield: Decimal,
    pub filtration_loss_fraction: Decimal,
    pub pasteurisation_efficiency: Decimal,
    pub concentration_rate: Decimal,
    pub packaging_efficiency: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DistributionConfig {
    pub storage_decay_fraction: Decimal,
    pub energy_cost_per_kg: Decimal,
    pub transport_loss_fraction: Decimal,
    pub consumer_demand_kg: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherConfig {
    pub description: String,
    pub risk_factor: Decimal,
}

impl WeatherConfig {
    /// Build the read-only snapshot shared by nursery and orchard stages
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot::new(self.description.clone(), self.risk_factor)
    }
}

impl Config {
    /// Load configuration from defaults, files, and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let defaults = config::Config::try_from(&Config::default())?;

        let config = config::Config::builder()
            // Start with the reference scenario defaults
            .add_source(defaults)
            .set_override("environment", environment.clone())?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate every rate, fraction, cost, and count
    ///
    /// Stages assume in-range values and never re-check; this is the only
    /// place malformed configuration is caught.
    pub fn validate(&self) -> FarmResult<()> {
        check("nursery.rootstock.target_trees", validate_count(self.nursery.rootstock.target_trees))?;
        check("nursery.rootstock.cost_per_tree", validate_non_negative(self.nursery.rootstock.cost_per_tree))?;
        check("nursery.rootstock.weather_risk_threshold", validate_fraction(self.nursery.rootstock.weather_risk_threshold))?;

        check("nursery.propagation.irrigation_cost_per_tree", validate_non_negative(self.nursery.propagation.irrigation_cost_per_tree))?;
        check("nursery.propagation.mulch_cost_per_tree", validate_non_negative(self.nursery.propagation.mulch_cost_per_tree))?;
        check("nursery.propagation.survival_rate", validate_fraction(self.nursery.propagation.survival_rate))?;

        check("nursery.grafting.labour_cost_per_tree", validate_non_negative(self.nursery.grafting.labour_cost_per_tree))?;
        check("nursery.grafting.pruning_cost_per_tree", validate_non_negative(self.nursery.grafting.pruning_cost_per_tree))?;
        check("nursery.grafting.success_rate", validate_fraction(self.nursery.grafting.success_rate))?;

        check("nursery.quality.min_trees", validate_count(self.nursery.quality.min_trees))?;
        check("nursery.quality.rejection_rate", validate_fraction(self.nursery.quality.rejection_rate))?;

        check("orchard.planting.land_prep_cost_per_tree", validate_non_negative(self.orchard.planting.land_prep_cost_per_tree))?;
        check("orchard.planting.scaffolding_cost_per_tree", validate_non_negative(self.orchard.planting.scaffolding_cost_per_tree))?;
        check("orchard.planting.density_factor", validate_non_negative(self.orchard.planting.density_factor))?;

        check("orchard.management.annual_pruning_cost_per_tree", validate_non_negative(self.orchard.management.annual_pruning_cost_per_tree))?;
        check("orchard.management.fertiliser_cost_per_tree", validate_non_negative(self.orchard.management.fertiliser_cost_per_tree))?;
        check("orchard.management.spray_cost_per_tree", validate_non_negative(self.orchard.management.spray_cost_per_tree))?;
        check("orchard.management.weather_modifier", validate_non_negative(self.orchard.management.weather_modifier))?;

        check("orchard.production.juvenile_period_years", validate_count(i64::from(self.orchard.production.juvenile_period_years)))?;
        check("orchard.production.mature_yield_per_tree", validate_non_negative(self.orchard.production.mature_yield_per_tree))?;
        check("orchard.production.weather_yield_modifier", validate_non_negative(self.orchard.production.weather_yield_modifier))?;

        check("harvesting.picking.field_grading_efficiency", validate_fraction(self.harvesting.picking.field_grading_efficiency))?;
        check("harvesting.picking.time_to_harvest_days", validate_count(self.harvesting.picking.time_to_harvest_days))?;

        check("harvesting.storage.storage_capacity_kg", validate_non_negative(self.harvesting.storage.storage_capacity_kg))?;
        check("harvesting.storage.daily_decay_rate", validate_fraction(self.harvesting.storage.daily_decay_rate))?;
        check("harvesting.storage.storage_days", validate_count(self.harvesting.storage.storage_days))?;

        check(
            "harvesting.grading",
            validate_grade_fractions(
                self.harvesting.grading.dessert_fraction,
                self.harvesting.grading.cooking_fraction,
                self.harvesting.grading.cider_fraction,
                self.harvesting.grading.juice_fraction,
            ),
        )?;
        check("harvesting.grading.processing_loss_fraction", validate_fraction(self.harvesting.grading.processing_loss_fraction))?;

        check("processing.fresh.washing_loss_fraction", validate_fraction(self.processing.fresh.washing_loss_fraction))?;
        check("processing.fresh.waxing_cost_per_kg", validate_non_negative(self.processing.fresh.waxing_cost_per_kg))?;
        check("processing.fresh.packing_cost_per_kg", validate_non_negative(self.processing.fresh.packing_cost_per_kg))?;

        check("processing.cider.pressing_yield", validate_fraction(self.processing.cider.pressing_yield))?;
        check("processing.cider.fermentation_loss_fraction", validate_fraction(self.processing.cider.fermentation_loss_fraction))?;
        check("processing.cider.bottling_efficiency", validate_fraction(self.processing.cider.bottling_efficiency))?;

        check("processing.juice.pressing_yield", validate_fraction(self.processing.juice.pressing_yield))?;
        check("processing.juice.filtration_loss_fraction", validate_fraction(self.processing.juice.filtration_loss_fraction))?;
        check("processing.juice.pasteurisation_efficiency", validate_fraction(self.processing.juice.pasteurisation_efficiency))?;
        check("processing.juice.concentration_rate", validate_fraction(self.processing.juice.concentration_rate))?;
        check("processing.juice.packaging_efficiency", validate_fraction(self.processing.juice.packaging_efficiency))?;

        check("distribution.storage_decay_fraction", validate_fraction(self.distribution.storage_decay_fraction))?;
        check("distribution.energy_cost_per_kg", validate_non_negative(self.distribution.energy_cost_per_kg))?;
        check("distribution.transport_loss_fraction", validate_fraction(self.distribution.transport_loss_fraction))?;
        check("distribution.consumer_demand_kg", validate_non_negative(self.distribution.consumer_demand_kg))?;

        check("weather.risk_factor", validate_fraction(self.weather.risk_factor))?;

        Ok(())
    }
}

fn check(field: &str, result: Result<(), &'static str>) -> FarmResult<()> {
    result.map_err(|message| FarmError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    })
}

impl Default for Config {
    /// The illustrative reference scenario: 1200 Honeycrisp grafts through
    /// a mild spring season
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            nursery: NurseryConfig {
                rootstock: RootstockConfig {
                    target_trees: 1200,
                    cost_per_tree: Decimal::new(12, 1),
                    weather_risk_threshold: Decimal::new(3, 1),
                },
                propagation: PropagationConfig {
                    irrigation_cost_per_tree: Decimal::new(3, 1),
                    mulch_cost_per_tree: Decimal::new(25, 2),
                    survival_rate: Decimal::new(85, 2),
                },
                grafting: GraftingConfig {
                    cultivar_name: "Honeycrisp".to_string(),
                    labour_cost_per_tree: Decimal::new(5, 1),
                    pruning_cost_per_tree: Decimal::new(2, 1),
                    success_rate: Decimal::new(9, 1),
                },
                quality: QualityControlConfig {
                    min_trees: 700,
                    rejection_rate: Decimal::new(5, 2),
                },
            },
            orchard: OrchardConfig {
                planting: PlantingConfig {
                    land_prep_cost_per_tree: Decimal::ONE,
                    scaffolding_cost_per_tree: Decimal::new(4, 1),
                    density_factor: Decimal::new(95, 2),
                },
                management: ManagementConfig {
                    annual_pruning_cost_per_tree: Decimal::new(6, 1),
                    fertiliser_cost_per_tree: Decimal::new(4, 1),
                    spray_cost_per_tree: Decimal::new(3, 1),
                    weather_modifier: Decimal::new(9, 1),
                },
                production: ProductionConfig {
                    juvenile_period_years: 4,
                    mature_yield_per_tree: Decimal::from(25),
                    weather_yield_modifier: Decimal::new(85, 2),
                },
            },
            harvesting: HarvestConfig {
                picking: PickingConfig {
                    field_grading_efficiency: Decimal::new(95, 2),
                    time_to_harvest_days: 10,
                },
                storage: StorageConfig {
                    storage_capacity_kg: Decimal::from(15_000),
                    daily_decay_rate: Decimal::new(1, 2),
                    storage_days: 7,
                },
                grading: GradingConfig {
                    dessert_fraction: Decimal::new(35, 2),
                    cooking_fraction: Decimal::new(25, 2),
                    cider_fraction: Decimal::new(2, 1),
                    juice_fraction: Decimal::new(15, 2),
                    processing_loss_fraction: Decimal::new(5, 2),
                },
            },
            processing: ProcessingConfig {
                fresh: FreshProcessingConfig {
                    washing_loss_fraction: Decimal::new(2, 2),
                    waxing_cost_per_kg: Decimal::new(1, 1),
                    packing_cost_per_kg: Decimal::new(15, 2),
                },
                cider: CiderProcessingConfig {
                    pressing_yield: Decimal::new(7, 1),
                    fermentation_loss_fraction: Decimal::new(5, 2),
                    bottling_efficiency: Decimal::new(9, 1),
                },
                juice: JuiceProcessingConfig {
                    pressing_yield: Decimal::new(65, 2),
                    filtration_loss_fraction: Decimal::new(8, 2),
                    pasteurisation_efficiency: Decimal::new(95, 2),
                    concentration_rate: Decimal::new(6, 1),
                    packaging_efficiency: Decimal::new(9, 1),
                },
            },
            distribution: DistributionConfig {
                storage_decay_fraction: Decimal::new(3, 2),
                energy_cost_per_kg: Decimal::new(5, 2),
                transport_loss_fraction: Decimal::new(2, 2),
                consumer_demand_kg: Decimal::from(8_000),
            },
            weather: WeatherConfig {
                description: "Mild spring with occasional showers".to_string(),
                risk_factor: Decimal::new(2, 1),
            },
        }
    }
}
