//! The skull bone table.

use crate::domain::{Bone, BoneCategory};

use BoneCategory::{Neurocranium, Viscerocranium};

pub const BONES: &[Bone] = &[
  Bone {
    name: "Frontal",
    latin: "Os frontale",
    category: Neurocranium,
    landmarks: &["Supraorbital foramen", "Glabella", "Frontal sinus"],
  },
  Bone {
    name: "Parietal",
    latin: "Os parietale",
    category: Neurocranium,
    landmarks: &["Parietal foramen", "Superior temporal line"],
  },
  Bone {
    name: "Temporal",
    latin: "Os temporale",
    category: Neurocranium,
    landmarks: &[
      "Mastoid process",
      "Styloid process",
      "External acoustic meatus",
      "Carotid canal",
    ],
  },
  Bone {
    name: "Occipital",
    latin: "Os occipitale",
    category: Neurocranium,
    landmarks: &[
      "Foramen magnum",
      "Occipital condyles",
      "External occipital protuberance",
      "Hypoglossal canal",
    ],
  },
  Bone {
    name: "Sphenoid",
    latin: "Os sphenoidale",
    category: Neurocranium,
    landmarks: &[
      "Sella turcica",
      "Optic canal",
      "Superior orbital fissure",
      "Foramen rotundum",
      "Foramen ovale",
      "Foramen spinosum",
    ],
  },
  Bone {
    name: "Ethmoid",
    latin: "Os ethmoidale",
    category: Neurocranium,
    landmarks: &["Cribriform plate", "Crista galli"],
  },
  Bone {
    name: "Maxilla",
    latin: "Maxilla",
    category: Viscerocranium,
    landmarks: &["Infraorbital foramen", "Maxillary sinus", "Alveolar process"],
  },
  Bone {
    name: "Mandible",
    latin: "Mandibula",
    category: Viscerocranium,
    landmarks: &["Mental foramen", "Mandibular foramen", "Condylar process"],
  },
  Bone {
    name: "Zygomatic",
    latin: "Os zygomaticum",
    category: Viscerocranium,
    landmarks: &["Zygomatic arch", "Zygomaticofacial foramen"],
  },
  Bone {
    name: "Nasal",
    latin: "Os nasale",
    category: Viscerocranium,
    landmarks: &["Nasion"],
  },
];
