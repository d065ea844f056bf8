//! Game catalog shapes returned by lookup and search calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::OperationResult;
use super::node::{item, scalar, Node, Scalar};

/// Image asset for a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogCover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar<i64>>,
    #[serde(alias = "imageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<Scalar<String>>,
}

impl CatalogCover {
    pub fn new(id: i64, image_id: Option<&str>) -> Self {
        Self {
            id: Some(Scalar::Typed(id)),
            image_id: image_id.map(|image_id| Scalar::Typed(image_id.to_string())),
        }
    }

    pub fn id(&self) -> Option<i64> {
        scalar(&self.id).copied()
    }

    pub fn image_id(&self) -> Option<&str> {
        scalar(&self.image_id).map(String::as_str)
    }
}

/// A searchable catalog entry. `cover` is absent when the entry has no art.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogGame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Node<CatalogCover>>,
}

impl CatalogGame {
    pub fn new(id: i64, name: &str, cover: Option<CatalogCover>) -> Self {
        Self {
            id: Some(Scalar::Typed(id)),
            name: Some(Scalar::Typed(name.to_string())),
            cover: cover.map(Node::Item),
        }
    }

    pub fn id(&self) -> Option<i64> {
        scalar(&self.id).copied()
    }

    pub fn name(&self) -> Option<&str> {
        scalar(&self.name).map(String::as_str)
    }

    pub fn cover(&self) -> Option<&CatalogCover> {
        item(&self.cover)
    }

    /// Image id of the cover, when the entry has one.
    pub fn cover_image_id(&self) -> Option<&str> {
        self.cover().and_then(CatalogCover::image_id)
    }
}

/// Response of a single-game lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogGameLookupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Node<CatalogGame>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl CatalogGameLookupResult {
    pub fn game(&self) -> Option<&CatalogGame> {
        item(&self.game)
    }
}

impl OperationResult for CatalogGameLookupResult {
    type Payload = Node<CatalogGame>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.game.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.game
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

/// Response of a catalog search (also used for random picks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<Node<CatalogGame>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl CatalogSearchResult {
    /// Games that reconstructed cleanly, in the order the backend sent them.
    pub fn games(&self) -> Vec<&CatalogGame> {
        self.games.as_ref().map(Node::items).unwrap_or_default()
    }
}

impl OperationResult for CatalogSearchResult {
    type Payload = Node<CatalogGame>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.games.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.games
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}
