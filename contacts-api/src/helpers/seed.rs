use shared_types::ContactMutation;
use tracing::info;

use crate::store::{ContactStore, StoreError};

struct DemoContact {
    first: &'static str,
    last: &'static str,
    twitter: &'static str,
    notes: &'static str,
}

const DEMO_CONTACTS: &[DemoContact] = &[
    DemoContact {
        first: "Ada",
        last: "Lovelace",
        twitter: "@ada",
        notes: "Wrote the first published algorithm.",
    },
    DemoContact {
        first: "Grace",
        last: "Hopper",
        twitter: "@grace",
        notes: "",
    },
    DemoContact {
        first: "Alan",
        last: "Turing",
        twitter: "",
        notes: "Ask about the imitation game.",
    },
    DemoContact {
        first: "Barbara",
        last: "Liskov",
        twitter: "@liskov",
        notes: "",
    },
    DemoContact {
        first: "Edsger",
        last: "Dijkstra",
        twitter: "",
        notes: "Prefers handwritten notes.",
    },
];

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Fills an empty store with a few sample contacts. Returns how many were added.
pub async fn seed_demo_contacts(store: &dyn ContactStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    for demo in DEMO_CONTACTS {
        let contact = store.create().await?;
        store
            .update(
                &contact.id,
                ContactMutation {
                    first: optional(demo.first),
                    last: optional(demo.last),
                    avatar: Some(format!(
                        "https://robohash.org/{}-{}.png?size=200x200",
                        demo.first.to_lowercase(),
                        demo.last.to_lowercase()
                    )),
                    twitter: optional(demo.twitter),
                    notes: optional(demo.notes),
                    favorite: None,
                },
            )
            .await?;
    }

    info!("Seeded {} demo contacts", DEMO_CONTACTS.len());
    Ok(DEMO_CONTACTS.len())
}
