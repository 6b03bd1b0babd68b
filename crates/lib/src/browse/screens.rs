//! Registry of browsable screens.
//!
//! Each screen is one configuration of the shared pipeline: where its
//! records come from, which fields search and scope look at, its fixed
//! list columns and its initial sort.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::engine::BrowseConfig;
use super::predicate::FieldPath;
use super::types::ParseError;
use super::view::{SortDirection, ViewState};
use crate::consts::{ASSET_COUNT, FIELDS_COUNT};
use crate::record::NestedFields;
use crate::source::Endpoint;

const RAW_FIELDS_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(15).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
  DataEntities,
  DataEntityFields,
  DiscoveredData,
  DiscoveredDataFields,
  RawData,
  RawDataFields,
  Workloads,
  Dependencies,
  ConfigItems,
}

/// A fixed list column: header text and the key it displays and sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListColumn {
  pub header: &'static str,
  pub key: &'static str,
}

impl Screen {
  pub const ALL: [Screen; 9] = [
    Screen::DataEntities,
    Screen::DataEntityFields,
    Screen::DiscoveredData,
    Screen::DiscoveredDataFields,
    Screen::RawData,
    Screen::RawDataFields,
    Screen::Workloads,
    Screen::Dependencies,
    Screen::ConfigItems,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Screen::DataEntities => "data-entities",
      Screen::DataEntityFields => "data-entity-fields",
      Screen::DiscoveredData => "discovered-data",
      Screen::DiscoveredDataFields => "discovered-data-fields",
      Screen::RawData => "raw-data",
      Screen::RawDataFields => "raw-data-fields",
      Screen::Workloads => "workloads",
      Screen::Dependencies => "dependencies",
      Screen::ConfigItems => "config-items",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Screen::DataEntities => "Data Entities",
      Screen::DataEntityFields => "Data Entity Fields",
      Screen::DiscoveredData => "Discovered Data Entities",
      Screen::DiscoveredDataFields => "Discovered Data Fields",
      Screen::RawData => "Raw Data Entities",
      Screen::RawDataFields => "Raw Data Fields",
      Screen::Workloads => "Application Workload Instances",
      Screen::Dependencies => "Dependency Links",
      Screen::ConfigItems => "Configuration Items",
    }
  }

  /// Collection the screen's records are fetched from.
  pub fn endpoint(self) -> Endpoint {
    match self {
      Screen::DataEntities | Screen::DataEntityFields => Endpoint::DataEntities,
      Screen::DiscoveredData | Screen::DiscoveredDataFields => Endpoint::DiscoveredData,
      Screen::RawData | Screen::RawDataFields => Endpoint::RawData,
      Screen::Workloads => Endpoint::Workloads,
      Screen::Dependencies => Endpoint::Dependencies,
      Screen::ConfigItems => Endpoint::ConfigItems,
    }
  }

  /// For nested panels: the list field on the parent record whose entries
  /// are browsed.
  pub fn parent_list(self) -> Option<&'static str> {
    match self {
      Screen::DataEntityFields | Screen::DiscoveredDataFields | Screen::RawDataFields => Some("fields"),
      _ => None,
    }
  }

  pub fn columns(self) -> &'static [ListColumn] {
    match self {
      Screen::DataEntities => &[
        ListColumn { header: "Name", key: "name" },
        ListColumn { header: "ID", key: "id" },
        ListColumn { header: "Fields Count", key: FIELDS_COUNT },
      ],
      Screen::DataEntityFields => &[
        ListColumn { header: "Name", key: "name" },
        ListColumn { header: "Anchor", key: "anchor" },
        ListColumn { header: "ID", key: "id" },
      ],
      Screen::DiscoveredData => &[
        ListColumn { header: "Entity Name", key: "data_entity_name" },
        ListColumn { header: "Source", key: "source_type" },
        ListColumn { header: "User", key: "user" },
        ListColumn { header: "Created Time", key: "created_time" },
        ListColumn { header: "Fields Count", key: FIELDS_COUNT },
        ListColumn { header: "Status", key: "status" },
      ],
      Screen::DiscoveredDataFields | Screen::RawDataFields => &[
        ListColumn { header: "Field Name", key: "field_name" },
        ListColumn { header: "Field Value", key: "field_value" },
        ListColumn { header: "Rating", key: "rating" },
        ListColumn { header: "Created Time", key: "created_time" },
      ],
      Screen::RawData => &[
        ListColumn { header: "Entity Name", key: "data_entity_name" },
        ListColumn { header: "Source", key: "source_type" },
        ListColumn { header: "User", key: "user" },
        ListColumn { header: "Created Time", key: "created_time" },
        ListColumn { header: "Fields Count", key: FIELDS_COUNT },
      ],
      Screen::Workloads => &[
        ListColumn { header: "AWI Name", key: "name" },
        ListColumn { header: "Environment", key: "environment" },
        ListColumn { header: "Move Principle", key: "hosting_model" },
        ListColumn { header: "Asset Count", key: ASSET_COUNT },
        ListColumn { header: "Description", key: "description" },
      ],
      Screen::Dependencies => &[
        ListColumn { header: "Source AWI", key: "source_workload_id" },
        ListColumn { header: "Target AWI", key: "target_workload_id" },
        ListColumn { header: "Environment", key: "environment" },
        ListColumn { header: "Level", key: "level" },
        ListColumn { header: "Latency Sensitive", key: "latency_sensitive" },
      ],
      Screen::ConfigItems => &[
        ListColumn { header: "Name", key: "name" },
        ListColumn { header: "Type", key: "type" },
        ListColumn { header: "ID", key: "id" },
        ListColumn { header: "Description", key: "description" },
      ],
    }
  }

  pub fn config(self) -> BrowseConfig {
    let fields = |names: &[&str]| names.iter().map(|n| FieldPath::field(n)).collect::<Vec<_>>();

    match self {
      Screen::DataEntities => BrowseConfig::new(fields(&["name", "id"])).with_count_column(FIELDS_COUNT, "fields"),
      Screen::DataEntityFields => BrowseConfig::new(fields(&["name", "anchor", "id"])),
      Screen::DiscoveredData => {
        let mut searchable = fields(&["data_entity_name", "user", "source_type", "source_name"]);
        searchable.push(FieldPath::nested("fields", "field_value"));
        BrowseConfig::new(searchable)
          .with_scope_fields(&["source_name", "source_type", "data_entity_name"])
          .with_count_column(FIELDS_COUNT, "fields")
          .with_nested(NestedFields::new("fields", "field_name", "field_value"))
          .with_source_type_field("source_type")
      }
      Screen::DiscoveredDataFields | Screen::RawDataFields => {
        BrowseConfig::new(fields(&["field_name", "field_value"]))
      }
      Screen::RawData => BrowseConfig::new(fields(&["data_entity_name", "user", "source_type"]))
        .with_count_column(FIELDS_COUNT, "fields")
        .with_source_type_field("source_type"),
      Screen::Workloads => {
        BrowseConfig::new(fields(&["name", "environment", "description"])).with_count_column(ASSET_COUNT, "ci_ids")
      }
      Screen::Dependencies => BrowseConfig::new(fields(&[
        "source_workload_id",
        "target_workload_id",
        "environment",
        "level",
      ])),
      Screen::ConfigItems => BrowseConfig::new(fields(&["name", "type", "description", "id"])),
    }
  }

  /// The state a screen opens with.
  pub fn default_view(self) -> ViewState {
    match self {
      Screen::DiscoveredData | Screen::RawData => ViewState::new("created_time", SortDirection::Desc),
      Screen::DiscoveredDataFields => ViewState::new("field_name", SortDirection::Asc),
      Screen::RawDataFields => ViewState::new("field_name", SortDirection::Asc).with_page_size(RAW_FIELDS_PAGE_SIZE),
      Screen::Dependencies => ViewState::new("source_workload_id", SortDirection::Asc),
      Screen::DataEntities | Screen::DataEntityFields | Screen::Workloads | Screen::ConfigItems => {
        ViewState::new("name", SortDirection::Asc)
      }
    }
  }
}

impl fmt::Display for Screen {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Screen {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Screen::ALL.into_iter().find(|screen| screen.name() == s).ok_or_else(|| {
      let names: Vec<&str> = Screen::ALL.iter().map(|screen| screen.name()).collect();
      ParseError::unknown("screen", s, &names)
    })
  }
}
