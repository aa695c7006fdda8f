//! Cranial nerves and the foramina they traverse.

use crate::domain::NerveForamen;

pub const CN_FORAMINA: &[NerveForamen] = &[
  NerveForamen { cn: "CN I", name: "Olfactory", foramen: "Cribriform plate" },
  NerveForamen { cn: "CN II", name: "Optic", foramen: "Optic canal" },
  NerveForamen { cn: "CN III", name: "Oculomotor", foramen: "Superior orbital fissure" },
  NerveForamen { cn: "CN IV", name: "Trochlear", foramen: "Superior orbital fissure" },
  NerveForamen { cn: "CN V1", name: "Ophthalmic", foramen: "Superior orbital fissure" },
  NerveForamen { cn: "CN V2", name: "Maxillary", foramen: "Foramen rotundum" },
  NerveForamen { cn: "CN V3", name: "Mandibular", foramen: "Foramen ovale" },
  NerveForamen { cn: "CN VI", name: "Abducens", foramen: "Superior orbital fissure" },
  NerveForamen { cn: "CN VII", name: "Facial", foramen: "Internal acoustic meatus" },
  NerveForamen { cn: "CN VIII", name: "Vestibulocochlear", foramen: "Internal acoustic meatus" },
  NerveForamen { cn: "CN IX", name: "Glossopharyngeal", foramen: "Jugular foramen" },
  NerveForamen { cn: "CN X", name: "Vagus", foramen: "Jugular foramen" },
  NerveForamen { cn: "CN XI", name: "Accessory", foramen: "Jugular foramen" },
  NerveForamen { cn: "CN XII", name: "Hypoglossal", foramen: "Hypoglossal canal" },
  NerveForamen { cn: "CN VII (exit)", name: "Facial (exit)", foramen: "Stylomastoid foramen" },
];
