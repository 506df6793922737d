//! # Field Schema
//!
//! The static catalog of every profile field, grouped into sections and, for most
//! sections, subsections. The table is fixed at compile time and never mutated.
//!
//! Grouping matters for the Markdown export (headings) and the fillable template
//! (section markers). The plain text export ignores it entirely.
//!
//! A section without subsections holds a single [`Group`] whose title is `None`.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Widget choice for a field. Irrelevant to every serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    LongText,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::ShortText => write!(f, "short"),
            FieldKind::LongText => write!(f, "long"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub title: Option<&'static str>,
    pub fields: &'static [Field],
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub groups: &'static [Group],
}

impl Section {
    /// True when the section is split into titled subsections.
    pub fn has_subsections(&self) -> bool {
        self.groups.iter().any(|g| g.title.is_some())
    }

    /// All fields of the section, subsections flattened in order.
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> + '_ {
        self.groups.iter().flat_map(|g| g.fields.iter())
    }
}

/// A field together with its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    pub subsection: Option<&'static str>,
    pub kind: FieldKind,
}

const fn short(key: &'static str, label: &'static str) -> Field {
    Field {
        key,
        label,
        kind: FieldKind::ShortText,
    }
}

const fn long(key: &'static str, label: &'static str) -> Field {
    Field {
        key,
        label,
        kind: FieldKind::LongText,
    }
}

/// Title used as the first line of every export.
pub const PROFILE_TITLE: &str = "CYBER DYSTOPIAN CHARACTER PROFILE";

static SECTIONS: &[Section] = &[
    Section {
        title: "CONCEPT & IDENTITY",
        groups: &[
            Group {
                title: None,
                fields: &[
                    short("characterName", "Character Name"),
                    short("aliases", "Aliases/Handle"),
                    short("concept", "Concept/Archetype"),
                    short("age", "Age"),
                    short("gender", "Gender"),
                    short("ethnicity", "Ethnicity/Nationality"),
                    short("languages", "Languages Spoken"),
                    short("birthplace", "Birthplace"),
                    short("location", "Current Location"),
                    short("socialClass", "Social Class/Status"),
                    short("digitalIdentity", "Digital Identity Score"),
                    short("legalStatus", "Legal Status"),
                ],
            },
        ],
    },
    Section {
        title: "PHYSICAL ATTRIBUTES",
        groups: &[
            Group {
                title: Some("Natural Characteristics"),
                fields: &[
                    short("height", "Height"),
                    short("weight", "Weight"),
                    short("build", "Build"),
                    short("eyeColor", "Eye Color"),
                    short("hair", "Hair"),
                    short("skinTone", "Skin Tone/Complexion"),
                    short("species", "Species (if applicable)"),
                    short("voice", "Voice Description"),
                    short("identifyingMarks", "Identifying Marks"),
                ],
            },
            Group {
                title: Some("Technological Augmentations"),
                fields: &[
                    short("typesAndFunctions", "Types and Functions"),
                    short("visibleModifications", "Visible Modifications"),
                    short("internalAugmentations", "Internal Augmentations"),
                    short("neuralImplants", "Neural Implants"),
                    short("interfaceCapabilities", "Interface Capabilities"),
                    short("origin", "Origin (Corporate/Black Market)"),
                    short("maintenanceRequirements", "Maintenance Requirements"),
                    short("knownGlitches", "Known Glitches"),
                    short("sideEffects", "Side Effects"),
                    short("legalityStatus", "Legality Status"),
                ],
            },
        ],
    },
    Section {
        title: "VISUAL REPRESENTATION",
        groups: &[
            Group {
                title: Some("Appearance & Style"),
                fields: &[
                    short("style", "Style/Fashion Choices"),
                    short("attire", "Typical Attire"),
                    short("protectiveGear", "Protective Gear/Armor"),
                    short("accessories", "Notable Accessories"),
                    short("weapons", "Weapons/Tools"),
                    short("urbanDecay", "Urban Decay Influence"),
                    short("technoFuturistic", "Techno-Futuristic Elements"),
                ],
            },
            Group {
                title: Some("Digital Presence"),
                fields: &[
                    short("digitalAvatar", "Digital Avatar Appearance"),
                    short("socialMedia", "Social Media Persona"),
                    short("virtualReality", "Virtual Reality Presence"),
                    short("digitalFootprint", "Digital Footprint"),
                ],
            },
        ],
    },
    Section {
        title: "PSYCHOLOGICAL PROFILE",
        groups: &[
            Group {
                title: Some("Core Personality"),
                fields: &[
                    long("generalDemeanor", "General Demeanor"),
                    long("dominantTraits", "Dominant Traits"),
                    long("positiveAttributes", "Positive Attributes"),
                    long("negativeAttributes", "Negative Attributes"),
                    long("fears", "Fears/Phobias"),
                    long("desires", "Desires"),
                    short("quirks", "Quirks/Habits"),
                    short("moralCode", "Moral Code"),
                    short("intelligence", "Intelligence Quotient"),
                    short("emotionalIntelligence", "Emotional Intelligence"),
                    short("personalityType", "Personality Type"),
                    long("publicPersona", "Public vs Private Persona"),
                ],
            },
            Group {
                title: Some("Mental Health"),
                fields: &[
                    short("knownConditions", "Known Conditions"),
                    short("digitalAddiction", "Digital Addiction Level"),
                    short("realityPerception", "Reality Perception Issues"),
                    long("copingMechanisms", "Coping Mechanisms"),
                    long("traumaResponse", "Trauma Response Patterns"),
                    short("selfAwareness", "Level of Self-Awareness"),
                    long("mentalStrengths", "Mental Strengths"),
                    long("mentalWeaknesses", "Mental Weaknesses"),
                ],
            },
        ],
    },
    Section {
        title: "SKILLS & ABILITIES",
        groups: &[
            Group {
                title: Some("Technical Capabilities"),
                fields: &[
                    short("hacking", "Hacking/Cybersecurity"),
                    short("programming", "Programming/Engineering"),
                    short("hardware", "Hardware Expertise"),
                    short("software", "Software Knowledge"),
                    short("networkNavigation", "Network Navigation"),
                    short("encryption", "Encryption/Decryption"),
                    short("virtualRealityProficiency", "Virtual Reality Proficiency"),
                ],
            },
            Group {
                title: Some("Physical Skills"),
                fields: &[
                    short("combatTraining", "Combat Training"),
                    short("weaponProficiency", "Weapon Proficiency"),
                    short("stealth", "Stealth/Agility"),
                    short("physicalEnhancements", "Physical Enhancements"),
                    short("survivalSkills", "Survival Skills"),
                    short("movementCapabilities", "Movement Capabilities"),
                ],
            },
            Group {
                title: Some("Social Skills"),
                fields: &[
                    short("manipulationAbilities", "Manipulation Abilities"),
                    short("digitalSocialEngineering", "Digital Social Engineering"),
                    short("leadershipCapabilities", "Leadership Capabilities"),
                    short("undergroundConnections", "Underground Connections"),
                    short("negotiationSkills", "Negotiation Skills"),
                    short("informationGathering", "Information Gathering"),
                ],
            },
        ],
    },
    Section {
        title: "BACKGROUND & HISTORY",
        groups: &[
            Group {
                title: Some("Personal History"),
                fields: &[
                    short("familyBackground", "Family Background"),
                    short("earlyLifeEvents", "Early Life Events"),
                    short("education", "Education/Training"),
                    short("lifeChanges", "Significant Life Changes"),
                    short("techMilestones", "Major Tech Milestones"),
                    short("formativeExperiences", "Formative Experiences"),
                    short("criminalRecord", "Criminal Record"),
                ],
            },
            Group {
                title: Some("Career/Professional Path"),
                fields: &[
                    short("currentOccupation", "Current Occupation"),
                    short("pastPositions", "Past Positions"),
                    short("achievements", "Notable Achievements"),
                    short("reputation", "Professional Reputation"),
                    short("professionalDigitalFootprint", "Digital Footprint"),
                    short("workplaceEnvironment", "Workplace Environment"),
                ],
            },
        ],
    },
    Section {
        title: "RELATIONSHIPS & CONNECTIONS",
        groups: &[
            Group {
                title: Some("Personal Relationships"),
                fields: &[
                    short("familyTies", "Family Ties"),
                    short("closeAssociates", "Close Associates"),
                    short("digitalRelations", "Digital-Only Relations"),
                    short("aiInteractions", "AI Interactions"),
                    short("trustNetwork", "Trust Network"),
                    short("romanticInterests", "Romantic Interests"),
                    short("mentors", "Mentors/Proteges"),
                    short("enemies", "Enemies/Rivals"),
                ],
            },
            Group {
                title: Some("Professional Networks"),
                fields: &[
                    short("corporateContacts", "Corporate Contacts"),
                    short("professionalUndergroundConnections", "Underground Connections"),
                    short("hackerCollectives", "Hacker Collectives"),
                    short("informationBrokers", "Information Brokers"),
                    short("aiPartnerships", "AI Partnerships"),
                    short("blackMarketTies", "Black Market Ties"),
                ],
            },
        ],
    },
    Section {
        title: "TECHNOLOGICAL PROFILE",
        groups: &[
            Group {
                title: Some("Digital Infrastructure"),
                fields: &[
                    short("primaryDevices", "Primary Device(s)"),
                    short("backupSystems", "Backup Systems"),
                    short("securityProtocols", "Security Protocols"),
                    short("networkAccess", "Network Access Level"),
                    short("digitalCurrency", "Digital Currency"),
                    short("virtualAssets", "Virtual Assets"),
                ],
            },
            Group {
                title: Some("Environmental Tech"),
                fields: &[
                    short("homeSecurity", "Home Security Systems"),
                    short("transportation", "Transportation Methods"),
                    short("communicationDevices", "Communication Devices"),
                    short("environmentalAdaptations", "Environmental Adaptations"),
                    short("climateProtection", "Climate Protection"),
                ],
            },
        ],
    },
    Section {
        title: "IDEOLOGICAL FRAMEWORK",
        groups: &[
            Group {
                title: Some("Beliefs & Values"),
                fields: &[
                    short("viewsOnTechnology", "Views on Technology"),
                    short("politicalStance", "Political Stance"),
                    short("corporateAttitudes", "Corporate Attitudes"),
                    short("humanEvolution", "Human Evolution Theory"),
                    short("digitalRights", "Digital Rights Position"),
                    short("privacyPhilosophy", "Privacy Philosophy"),
                    short("authorityPerspective", "Authority Perspective"),
                ],
            },
            Group {
                title: Some("Ethical Framework"),
                fields: &[
                    short("redLines", "Red Lines"),
                    short("justifiedActions", "Justified Actions"),
                    short("technologyEthics", "Technology Ethics"),
                    short("dataPrivacy", "Data Privacy Views"),
                    short("aiRights", "AI Rights Position"),
                    short("compromiseThreshold", "Compromise Threshold"),
                ],
            },
        ],
    },
    Section {
        title: "MOTIVATIONS & GOALS",
        groups: &[
            Group {
                title: Some("Primary Drivers"),
                fields: &[
                    short("shortTermObjectives", "Short-term Objectives"),
                    short("longTermAmbitions", "Long-term Ambitions"),
                    short("personalMission", "Personal Mission"),
                    short("hiddenAgendas", "Hidden Agendas"),
                    short("revengeTargets", "Revenge Targets"),
                    short("survivalStrategies", "Survival Strategies"),
                ],
            },
            Group {
                title: Some("Conflict Points"),
                fields: &[
                    short("personalDemons", "Personal Demons"),
                    short("externalThreats", "External Threats"),
                    short("systemicChallenges", "Systemic Challenges"),
                    short("technologicalLimitations", "Technological Limitations"),
                    short("socialBarriers", "Social Barriers"),
                    short("environmentalPressures", "Environmental Pressures"),
                ],
            },
        ],
    },
    Section {
        title: "FACTION & ORGANIZATION TIES",
        groups: &[
            Group {
                title: Some("Affiliations"),
                fields: &[
                    short("primaryOrganization", "Primary Organization"),
                    short("secondaryGroups", "Secondary Groups"),
                    short("pastAssociations", "Past Associations"),
                    short("currentStanding", "Current Standing"),
                    short("loyaltyLevel", "Loyalty Level"),
                    short("roleWithinGroups", "Role Within Groups"),
                ],
            },
            Group {
                title: Some("Responsibilities"),
                fields: &[
                    short("officialDuties", "Official Duties"),
                    short("unofficialRoles", "Unofficial Roles"),
                    short("groupContributions", "Group Contributions"),
                    short("expectedServices", "Expected Services"),
                    short("debtObligations", "Debt Obligations"),
                    short("undergroundActivities", "Underground Activities"),
                ],
            },
        ],
    },
    Section {
        title: "SURVEILLANCE & REBELLION",
        groups: &[
            Group {
                title: Some("Surveillance Profile"),
                fields: &[
                    short("knownMonitoring", "Known Monitoring"),
                    short("evasionTechniques", "Evasion Techniques"),
                    short("securityBreaches", "Security Breaches"),
                    short("digitalTraces", "Digital Traces"),
                    short("trackingStatus", "Tracking Status"),
                    short("lawEnforcementHistory", "Law Enforcement History"),
                ],
            },
            Group {
                title: Some("Resistance Activities"),
                fields: &[
                    short("pastActions", "Past Actions"),
                    short("currentInvolvement", "Current Involvement"),
                    short("knownAssociates", "Known Associates"),
                    short("targetHistory", "Target History"),
                    short("successRate", "Success/Failure Rate"),
                    short("methodsOfResistance", "Methods of Resistance"),
                ],
            },
        ],
    },
    Section {
        title: "ENVIRONMENTAL INTERACTION",
        groups: &[
            Group {
                title: Some("Urban Navigation"),
                fields: &[
                    short("territoryKnowledge", "Territory Knowledge"),
                    short("safeHouses", "Safe Houses"),
                    short("undergroundRoutes", "Underground Routes"),
                    short("resourceLocations", "Resource Locations"),
                    short("dangerZones", "Danger Zones"),
                ],
            },
            Group {
                title: Some("Environmental Impact"),
                fields: &[
                    short("pollutionEffects", "Pollution Effects"),
                    short("climateAdaptation", "Climate Adaptation"),
                    short("resourceAccess", "Resource Access"),
                    short("territoryControl", "Territory Control"),
                    short("environmentalThreats", "Environmental Threats"),
                ],
            },
        ],
    },
    Section {
        title: "QUOTES & EXPRESSIONS",
        groups: &[
            Group {
                title: None,
                fields: &[
                    long("notableQuotes", "Notable Quotes"),
                    long("commonPhrases", "Common Phrases"),
                    long("philosophicalStatements", "Philosophical Statements"),
                    short("codeWords", "Code Words"),
                    long("personalMantras", "Personal Mantras"),
                ],
            },
        ],
    },
    Section {
        title: "CHARACTER DEVELOPMENT",
        groups: &[
            Group {
                title: Some("Evolution Points"),
                fields: &[
                    short("startingState", "Starting State"),
                    short("criticalDecisionPoints", "Critical Decision Points"),
                    long("growthOpportunities", "Growth Opportunities"),
                    long("potentialChanges", "Potential Changes"),
                    short("breakingPoints", "Breaking Points"),
                ],
            },
            Group {
                title: Some("Development Questions"),
                fields: &[
                    long("technologyImpact", "Technology Impact"),
                    long("moralEvolution", "Moral Evolution"),
                    long("relationshipChanges", "Relationship Changes"),
                    long("societyRoleShifts", "Society Role Shifts"),
                    long("futureTrajectories", "Future Trajectories"),
                ],
            },
        ],
    },
    Section {
        title: "ADDITIONAL NOTES",
        groups: &[
            Group {
                title: None,
                fields: &[
                    long("uniqueQuirks", "Unique Quirks"),
                    long("storyHooks", "Story Hooks"),
                    long("plotConnections", "Plot Connections"),
                    long("worldBuildingElements", "World-Building Elements"),
                    long("futurePossibilities", "Future Possibilities"),
                ],
            },
        ],
    },
];

static BY_KEY: Lazy<HashMap<&'static str, FieldDescriptor>> =
    Lazy::new(|| descriptors().map(|d| (d.key, d)).collect());

/// Sections in display order.
pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Every field in registry order, with its grouping.
pub fn descriptors() -> impl Iterator<Item = FieldDescriptor> {
    SECTIONS.iter().flat_map(|section| {
        section.groups.iter().flat_map(move |group| {
            group.fields.iter().map(move |field| FieldDescriptor {
                key: field.key,
                label: field.label,
                section: section.title,
                subsection: group.title,
                kind: field.kind,
            })
        })
    })
}

pub fn lookup(key: &str) -> Option<FieldDescriptor> {
    BY_KEY.get(key).copied()
}

pub fn is_registered(key: &str) -> bool {
    BY_KEY.contains_key(key)
}

pub fn field_count() -> usize {
    BY_KEY.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: Vec<_> = descriptors().map(|d| d.key).collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(field_count(), keys.len());
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(sections().len(), 16);
        assert_eq!(descriptors().count(), 198);
        assert_eq!(sections()[0].title, "CONCEPT & IDENTITY");
        assert_eq!(sections()[15].title, "ADDITIONAL NOTES");
    }

    #[test]
    fn test_flat_sections_have_no_subsections() {
        let flat: Vec<_> = sections()
            .iter()
            .filter(|s| !s.has_subsections())
            .map(|s| s.title)
            .collect();
        assert_eq!(
            flat,
            vec!["CONCEPT & IDENTITY", "QUOTES & EXPRESSIONS", "ADDITIONAL NOTES"]
        );
    }

    #[test]
    fn test_lookup() {
        let d = lookup("aliases").unwrap();
        assert_eq!(d.label, "Aliases/Handle");
        assert_eq!(d.section, "CONCEPT & IDENTITY");
        assert_eq!(d.subsection, None);

        let d = lookup("copingMechanisms").unwrap();
        assert_eq!(d.section, "PSYCHOLOGICAL PROFILE");
        assert_eq!(d.subsection, Some("Mental Health"));
        assert_eq!(d.kind, FieldKind::LongText);

        assert!(lookup("favouriteColour").is_none());
    }

    #[test]
    fn test_labels_may_repeat() {
        let footprints: Vec<_> = descriptors()
            .filter(|d| d.label == "Digital Footprint")
            .map(|d| d.key)
            .collect();
        assert_eq!(
            footprints,
            vec!["digitalFootprint", "professionalDigitalFootprint"]
        );
    }

    #[test]
    fn test_section_fields_flatten_in_order() {
        let physical = &sections()[1];
        let keys: Vec<_> = physical.fields().map(|f| f.key).collect();
        assert_eq!(keys.first(), Some(&"height"));
        assert_eq!(keys.last(), Some(&"legalityStatus"));
        assert_eq!(keys.len(), 19);
    }
}
