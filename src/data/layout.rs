use panepack::{PackOutput, PlacedItem};
use serde::{Deserialize, Serialize};

use crate::{data::ItemList, label::ItemLabel};

/// A finished layout in the shape panecut writes it out, with every placement
/// tagged with the label of the piece it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub page_size: (u32, u32),

    /// Pages in order, starting with page 1.
    pub pages: Vec<LayoutPage>,

    /// Pieces that are bigger than the page and so appear on no page.
    #[serde(default)]
    pub unplaceable: Vec<UnplacedPiece>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutPage {
    pub number: usize,

    /// The fraction of the page covered by pieces.
    pub utilization: f64,

    pub items: Vec<PlacedPiece>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacedPiece {
    pub label: ItemLabel,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UnplacedPiece {
    pub label: ItemLabel,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn new(name: Option<&str>, output: &PackOutput, item_list: &ItemList) -> Self {
        let pages = output
            .pages()
            .iter()
            .enumerate()
            .map(|(index, page)| LayoutPage {
                number: index + 1,
                utilization: page.utilization(),
                items: page
                    .items()
                    .iter()
                    .map(|placed| PlacedPiece::new(placed, item_list))
                    .collect(),
            })
            .collect();

        let unplaceable = output
            .unplaceable()
            .iter()
            .map(|unplaceable| {
                let item = unplaceable.item();

                UnplacedPiece {
                    label: item_list
                        .label(item.id())
                        .cloned()
                        .unwrap_or_else(|| ItemLabel::from_size(item.size())),
                    width: item.size().0,
                    height: item.size().1,
                }
            })
            .collect();

        Self {
            name: name.map(ToOwned::to_owned),
            page_size: output.page_size(),
            pages,
            unplaceable,
        }
    }
}

impl PlacedPiece {
    fn new(placed: &PlacedItem, item_list: &ItemList) -> Self {
        let label = match item_list.label(placed.id()) {
            Some(label) => label.clone(),
            None => ItemLabel::new(&placed.label()),
        };

        Self {
            label,
            x: placed.position().0,
            y: placed.position().1,
            width: placed.size().0,
            height: placed.size().1,
        }
    }
}
