//! TechniqueCatalog - Static step tables for every ideation technique.
//!
//! Each [`TechniqueId`] maps to exactly one immutable [`TechniqueDefinition`].
//! All step ordering and per-step payload rules live here so the session
//! aggregate never has to know technique specifics.
//!
//! # Step Tables
//!
//! | Technique | Steps | Generating steps |
//! |---|---|---|
//! | Random Word Association | 6 | 1 (stimulus word) |
//! | Reverse Brainstorming | 6 | 1 (reversed problem) |
//! | Lotus Blossom | 6 | none |

use crate::domain::foundation::{DomainError, TechniqueId};

use super::definition::{GenerationRule, PayloadShape, StepHints, StepSpec, TechniqueDefinition};

/// Central lookup for technique definitions.
pub struct TechniqueCatalog;

impl TechniqueCatalog {
    /// Returns the definition for a technique.
    pub fn definition(id: TechniqueId) -> &'static TechniqueDefinition {
        match id {
            TechniqueId::RandomWordAssociation => &RANDOM_WORD_ASSOCIATION,
            TechniqueId::ReverseBrainstorming => &REVERSE_BRAINSTORMING,
            TechniqueId::LotusBlossom => &LOTUS_BLOSSOM,
        }
    }

    /// Resolves a wire identifier.
    ///
    /// # Errors
    ///
    /// - `UnknownTechnique` if the identifier names no technique
    pub fn resolve(raw: &str) -> Result<&'static TechniqueDefinition, DomainError> {
        let id: TechniqueId = raw.parse()?;
        Ok(Self::definition(id))
    }

    /// Returns every definition in catalog order.
    pub fn all() -> impl Iterator<Item = &'static TechniqueDefinition> {
        TechniqueId::all().iter().map(|id| Self::definition(*id))
    }
}

static RANDOM_WORD_ASSOCIATION: TechniqueDefinition = TechniqueDefinition {
    id: TechniqueId::RandomWordAssociation,
    overview: "Uses random stimulus words to trigger new associations and breakthrough thinking",
    when_to_use: "When stuck in conventional thinking patterns or need fresh perspectives",
    duration_hint: "30-45 minutes",
    participant_hint: "Works with 1-8 people",
    steps: &[
        StepSpec {
            action: "acknowledge_problem",
            instruction: "Clearly define the problem or challenge",
            message: "Review and confirm the problem statement",
            prompt: "Problem: {problem}",
            guidance: Some("Is this problem statement clear and well-defined?"),
            hints: None,
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
        StepSpec {
            action: "random_word_generated",
            instruction: "Generate or select a random word (system provides this)",
            message: "Your random word is ready",
            prompt: "Spend 5 minutes associating this word with your problem",
            guidance: None,
            hints: None,
            payload: PayloadShape::Acknowledge,
            generation: Some(GenerationRule::StimulusWord),
        },
        StepSpec {
            action: "collect_associations",
            instruction: "Spend 5 minutes freely associating between word and problem",
            message: "Record your associations between the random word and problem",
            prompt: "What connections did you discover?",
            guidance: Some("List at least 5 associations or metaphors"),
            hints: None,
            payload: PayloadShape::Mapping {
                field: "associations",
            },
            generation: None,
        },
        StepSpec {
            action: "develop_ideas",
            instruction: "Develop 3-5 concrete ideas from strongest associations",
            message: "Transform your best associations into concrete ideas",
            prompt: "Develop 3-5 actionable solutions from your associations",
            guidance: Some("Focus on the most promising connections"),
            hints: None,
            payload: PayloadShape::IdeaList,
            generation: None,
        },
        StepSpec {
            action: "evaluate_ideas",
            instruction: "Evaluate the generated ideas against shared criteria",
            message: "Evaluate and refine your generated ideas",
            prompt: "Which ideas show the most potential?",
            guidance: None,
            hints: Some(StepHints {
                label: "criteria",
                items: &["Feasibility", "Novelty", "Impact", "Resources required"],
            }),
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
        StepSpec {
            action: "refine_concepts",
            instruction: "Refine the most promising concepts and agree next steps",
            message: "Random Word Association session wrap-up",
            prompt: "Which concepts will you carry forward?",
            guidance: None,
            hints: Some(StepHints {
                label: "next_options",
                items: &[
                    "Try another random word",
                    "Switch to different technique",
                    "Develop selected ideas further",
                ],
            }),
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
    ],
    tips: &[
        "Don't judge associations initially - embrace absurdity",
        "Use 'How might...' questions to develop associations",
        "Try multiple random words if first doesn't spark ideas",
        "Focus on properties, functions, and relationships",
    ],
};

static REVERSE_BRAINSTORMING: TechniqueDefinition = TechniqueDefinition {
    id: TechniqueId::ReverseBrainstorming,
    overview: "Approaches problems by first considering how to cause or worsen them",
    when_to_use: "When direct brainstorming isn't working or to identify hidden assumptions",
    duration_hint: "45-60 minutes",
    participant_hint: "Works best with 3-10 people",
    steps: &[
        StepSpec {
            action: "state_original_problem",
            instruction: "Clearly state the original problem",
            message: "Confirm the original problem statement",
            prompt: "Original problem: {problem}",
            guidance: Some("Make sure everyone understands the challenge"),
            hints: None,
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
        StepSpec {
            action: "reverse_problem",
            instruction: "Reverse the problem: 'How could we make this worse?'",
            message: "Now we'll think backwards - how to make it WORSE",
            prompt: "Brainstorm ways to cause failure or create more problems",
            guidance: Some("Embrace destructive and absurd ideas!"),
            hints: None,
            payload: PayloadShape::Acknowledge,
            generation: Some(GenerationRule::ReversedProblem),
        },
        StepSpec {
            action: "generate_anti_solutions",
            instruction: "Brainstorm ways to cause failure or create more problems",
            message: "Generate anti-solutions (ways to make problem worse)",
            prompt: "What would guarantee failure?",
            guidance: Some("Don't filter - embrace destructive and absurd ideas"),
            hints: Some(StepHints {
                label: "examples",
                items: &[
                    "Ignore customer feedback completely",
                    "Use the most expensive materials possible",
                    "Never test anything before launch",
                    "Hire people with no relevant experience",
                ],
            }),
            payload: PayloadShape::List {
                field: "anti_solutions",
            },
            generation: None,
        },
        StepSpec {
            action: "reverse_analysis",
            instruction: "For each 'anti-solution', identify the opposite action",
            message: "Now reverse each anti-solution into a positive approach",
            prompt: "For each way to make it worse, what's the opposite?",
            guidance: Some("Transform destructive ideas into constructive solutions"),
            hints: None,
            payload: PayloadShape::List {
                field: "reversed_solutions",
            },
            generation: None,
        },
        StepSpec {
            action: "synthesize_solutions",
            instruction: "Transform reversed ideas into practical solutions",
            message: "Combine and refine your reversed solutions",
            prompt: "Which reversed ideas offer the best solutions?",
            guidance: Some("Look for unexpected insights from the reversal process"),
            hints: None,
            payload: PayloadShape::IdeaList,
            generation: None,
        },
        StepSpec {
            action: "feasibility_check",
            instruction: "Evaluate feasibility and implementation potential",
            message: "Evaluate feasibility and implementation potential",
            prompt: "Which solutions are most implementable?",
            guidance: None,
            hints: Some(StepHints {
                label: "criteria",
                items: &["Practicality", "Resources", "Timeline", "Impact"],
            }),
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
    ],
    tips: &[
        "Encourage wild and destructive ideas in reverse phase",
        "Look for hidden assumptions in anti-solutions",
        "Some reversals lead to unexpected solution paths",
        "Use humor to make process engaging and less threatening",
    ],
};

static LOTUS_BLOSSOM: TechniqueDefinition = TechniqueDefinition {
    id: TechniqueId::LotusBlossom,
    overview: "Systematic idea expansion using 8x8 matrix to explore problem dimensions",
    when_to_use: "For complex problems requiring comprehensive exploration",
    duration_hint: "60-90 minutes",
    participant_hint: "Works with 2-12 people, best with 4-8",
    steps: &[
        StepSpec {
            action: "establish_core_problem",
            instruction: "Place core problem in center of 3x3 grid",
            message: "Place your core problem at the center",
            prompt: "Core problem: {problem}",
            guidance: Some("This goes in the center of your 3x3 grid"),
            hints: None,
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
        StepSpec {
            action: "identify_themes",
            instruction: "Identify 8 key themes/aspects around the center",
            message: "Identify 8 key themes/aspects around the core problem",
            prompt: "What are the main dimensions of this problem?",
            guidance: Some("These themes will surround your core problem"),
            hints: Some(StepHints {
                label: "examples",
                items: &[
                    "Technical aspects",
                    "User experience",
                    "Cost factors",
                    "Time constraints",
                    "Resource needs",
                    "Risk factors",
                    "Market conditions",
                    "Implementation challenges",
                ],
            }),
            payload: PayloadShape::List { field: "themes" },
            generation: None,
        },
        StepSpec {
            action: "expand_themes",
            instruction: "Create a new 3x3 grid for each theme and generate 8 ideas for it",
            message: "Create a new 3x3 grid for each theme",
            prompt: "For each theme, generate 8 related ideas/solutions",
            guidance: Some("You'll create 8 separate grids, one for each theme"),
            hints: None,
            payload: PayloadShape::Mapping {
                field: "theme_grids",
            },
            generation: None,
        },
        StepSpec {
            action: "map_connections",
            instruction: "Look for patterns and connections across grids",
            message: "Look for connections between ideas across different themes",
            prompt: "Which ideas from different grids relate to each other?",
            guidance: Some("Draw lines or use colors to show relationships"),
            hints: None,
            payload: PayloadShape::List {
                field: "connections",
            },
            generation: None,
        },
        StepSpec {
            action: "cluster_solutions",
            instruction: "Cluster related ideas into solution families",
            message: "Group related ideas into solution clusters",
            prompt: "Which ideas work together as integrated solutions?",
            guidance: Some("Create 3-5 solution families from your connections"),
            hints: None,
            payload: PayloadShape::List {
                field: "solution_clusters",
            },
            generation: None,
        },
        StepSpec {
            action: "implementation_path",
            instruction: "Design implementation roadmap for best clusters",
            message: "Design implementation roadmap for best clusters",
            prompt: "How would you implement your top solution clusters?",
            guidance: None,
            hints: Some(StepHints {
                label: "considerations",
                items: &["Priority order", "Dependencies", "Resources", "Timeline"],
            }),
            payload: PayloadShape::Acknowledge,
            generation: None,
        },
    ],
    tips: &[
        "Ensure themes are distinct but comprehensive",
        "Don't worry if some theme grids are easier than others",
        "Look for unexpected connections between distant ideas",
        "Use color coding to identify solution clusters",
    ],
};
