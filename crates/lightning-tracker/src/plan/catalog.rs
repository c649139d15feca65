use super::{PhasePlan, PlanId, PlanStep};

struct StepEntry {
    id: &'static str,
    name: &'static str,
    duration: &'static str,
    description: &'static str,
    files_to_create: &'static [&'static str],
    files_to_modify: &'static [&'static str],
    tests: &'static [&'static str],
    verification: &'static [&'static str],
}

struct PlanEntry {
    name: &'static str,
    duration: &'static str,
    prerequisites: &'static [&'static str],
    steps: &'static [StepEntry],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn optional(items: &[&str]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| owned(items))
}

pub(super) fn plan_for(id: PlanId) -> PhasePlan {
    let entry = match id {
        PlanId::Phase2 => &PHASE2,
        PlanId::Phase3 => &PHASE3,
        PlanId::Phase4 => &PHASE4,
        PlanId::Phase5 => &PHASE5,
        PlanId::Phase6 => &PHASE6,
    };

    PhasePlan {
        phase: id.number(),
        name: entry.name.to_string(),
        duration: entry.duration.to_string(),
        prerequisites: owned(entry.prerequisites),
        steps: entry
            .steps
            .iter()
            .map(|step| PlanStep {
                id: step.id.to_string(),
                name: step.name.to_string(),
                duration: step.duration.to_string(),
                description: step.description.to_string(),
                files_to_create: optional(step.files_to_create),
                files_to_modify: optional(step.files_to_modify),
                tests: optional(step.tests),
                verification: owned(step.verification),
            })
            .collect(),
    }
}

static PHASE2: PlanEntry = PlanEntry {
    name: "Enhanced Dictionary Features",
    duration: "8 weeks",
    prerequisites: &["Phase 1 completed", "API server running", "Cache system operational"],
    steps: &[
        StepEntry {
            id: "2.1",
            name: "Multi-Definition Display",
            duration: "3 hours",
            description: "Implement display of multiple definitions per word with POS grouping",
            files_to_create: &[
                "src/components/MultiDefinition.tsx",
                "src/types/enhanced-dictionary.ts",
            ],
            files_to_modify: &[
                "src/components/OptimizedPopup.tsx",
                "api/src/services/dictionary.ts",
            ],
            tests: &["Definition grouping", "POS display", "Expand/collapse functionality"],
            verification: &[
                "Multiple definitions visible",
                "Grouped by part of speech",
                "Performance <50ms",
            ],
        },
        StepEntry {
            id: "2.2",
            name: "Clickable Cross-References",
            duration: "4 hours",
            description: "Make word references within definitions clickable for instant navigation",
            files_to_create: &[
                "src/components/CrossReference.tsx",
                "src/hooks/useWordNavigation.ts",
            ],
            files_to_modify: &["src/components/MultiDefinition.tsx"],
            tests: &["Click navigation", "History tracking", "Circular reference handling"],
            verification: &[
                "Words are clickable",
                "Navigation history works",
                "Back/forward buttons functional",
            ],
        },
        StepEntry {
            id: "2.3",
            name: "Pattern-Based Prefetching",
            duration: "3 hours",
            description: "Implement simple pattern-based word prefetching for faster perceived performance",
            files_to_create: &["src/utils/prefetcher.ts", "src-tauri/src/prefetch.rs"],
            files_to_modify: &["src-tauri/src/cache.rs"],
            tests: &["Prefetch accuracy", "Cache warming", "Memory limits"],
            verification: &[
                "Common patterns identified",
                "Cache hit rate >85%",
                "Memory usage controlled",
            ],
        },
        StepEntry {
            id: "2.4",
            name: "User Account System",
            duration: "6 hours",
            description: "Basic user accounts with preferences and saved words",
            files_to_create: &[
                "src/components/UserAccount.tsx",
                "src/hooks/useAuth.ts",
                "api/src/routes/auth.ts",
                "api/src/models/user.ts",
            ],
            files_to_modify: &["src/App.tsx", "api/src/index.ts"],
            tests: &["Registration flow", "Login/logout", "Preference persistence"],
            verification: &["User can register", "Preferences saved", "Secure authentication"],
        },
        StepEntry {
            id: "2.5",
            name: "Word History Tracking",
            duration: "2 hours",
            description: "Track and display user's word lookup history",
            files_to_create: &["src/components/WordHistory.tsx", "src/hooks/useHistory.ts"],
            files_to_modify: &["src-tauri/src/main.rs"],
            tests: &["History recording", "History display", "Privacy controls"],
            verification: &["History saved locally", "Searchable history", "Clear history option"],
        },
        StepEntry {
            id: "2.6",
            name: "Performance Optimization Round 2",
            duration: "4 hours",
            description: "Optimize for 100+ concurrent users and larger dictionary",
            files_to_create: &[],
            files_to_modify: &[
                "api/src/services/dictionary.ts",
                "src-tauri/src/cache.rs",
                "src/utils/performance.ts",
            ],
            tests: &["Load testing", "Memory profiling", "Response time benchmarks"],
            verification: &["100 concurrent users", "Response time <50ms", "Memory usage <150MB"],
        },
        StepEntry {
            id: "2.7",
            name: "AI Infrastructure Placeholders",
            duration: "2 hours",
            description: "Create placeholder infrastructure for future AI features",
            files_to_create: &["api/src/services/ai-placeholder.ts", "src/types/ai-context.ts"],
            files_to_modify: &["api/src/routes/index.ts"],
            tests: &["API structure", "Fallback behavior", "Type definitions"],
            verification: &[
                "Endpoints return mock data",
                "Types defined",
                "Documentation complete",
            ],
        },
        StepEntry {
            id: "2.8",
            name: "Enhanced Error Handling",
            duration: "2 hours",
            description: "Improve error handling and user feedback",
            files_to_create: &["src/components/ErrorBoundary.tsx", "src/utils/error-handler.ts"],
            files_to_modify: &["src/App.tsx", "src-tauri/src/error.rs"],
            tests: &["Error recovery", "User messaging", "Logging"],
            verification: &[
                "Graceful error handling",
                "Clear error messages",
                "Error logs captured",
            ],
        },
        StepEntry {
            id: "2.9",
            name: "Dictionary Data Enhancement",
            duration: "3 hours",
            description: "Add more detailed dictionary data (synonyms, usage notes)",
            files_to_create: &[],
            files_to_modify: &["data/process_excel_simple.py", "api/src/types/dictionary.ts"],
            tests: &["Data integrity", "Enhanced fields", "Backward compatibility"],
            verification: &[
                "Synonyms displayed",
                "Usage notes available",
                "No performance regression",
            ],
        },
        StepEntry {
            id: "2.10",
            name: "Settings Enhancement",
            duration: "2 hours",
            description: "Add more customization options to settings",
            files_to_create: &[],
            files_to_modify: &["src/components/Settings.tsx", "src/types/settings.ts"],
            tests: &["New settings work", "Persistence", "UI updates"],
            verification: &["Font size control", "Color themes", "Language preferences"],
        },
        StepEntry {
            id: "2.11",
            name: "Keyboard Shortcuts System",
            duration: "3 hours",
            description: "Implement comprehensive keyboard shortcuts",
            files_to_create: &["src/hooks/useKeyboardShortcuts.ts"],
            files_to_modify: &["src/App.tsx", "src/components/Settings.tsx"],
            tests: &["Shortcut registration", "Conflict detection", "Customization"],
            verification: &["All shortcuts work", "No conflicts", "Customizable"],
        },
        StepEntry {
            id: "2.12",
            name: "Export/Import Features",
            duration: "3 hours",
            description: "Allow users to export/import their data",
            files_to_create: &["src/components/DataExport.tsx", "src/utils/data-export.ts"],
            files_to_modify: &["src/components/Settings.tsx"],
            tests: &["Export formats", "Import validation", "Data integrity"],
            verification: &["JSON export works", "CSV export works", "Import preserves data"],
        },
        StepEntry {
            id: "2.13",
            name: "Search Enhancement",
            duration: "3 hours",
            description: "Improve search with fuzzy matching and suggestions",
            files_to_create: &["api/src/services/search.ts"],
            files_to_modify: &["api/src/routes/index.ts", "src/components/OptimizedPopup.tsx"],
            tests: &["Fuzzy search", "Suggestions", "Performance"],
            verification: &["Typos handled", "Relevant suggestions", "Fast results"],
        },
        StepEntry {
            id: "2.14",
            name: "Documentation Update",
            duration: "2 hours",
            description: "Update all documentation for Phase 2 features",
            files_to_create: &[],
            files_to_modify: &["README.md", "docs/API.md", "docs/USER_GUIDE.md"],
            tests: &["Documentation accuracy", "Examples work", "API docs complete"],
            verification: &["All features documented", "Examples tested", "API reference complete"],
        },
        StepEntry {
            id: "2.15",
            name: "Phase 2 Testing & Polish",
            duration: "4 hours",
            description: "Comprehensive testing and final polish",
            files_to_create: &[],
            files_to_modify: &["Various test files"],
            tests: &["Integration tests", "Performance benchmarks", "User acceptance"],
            verification: &["All tests pass", "Performance targets met", "Ready for Phase 3"],
        },
    ],
};

static PHASE3: PlanEntry = PlanEntry {
    name: "Language Expansion",
    duration: "8 weeks",
    prerequisites: &["Phase 2 completed", "Translation pipeline ready", "Extended cache system"],
    steps: &[
        StepEntry {
            id: "3.1",
            name: "Translation Infrastructure",
            duration: "6 hours",
            description: "Set up infrastructure for multilingual support",
            files_to_create: &[
                "api/src/services/translation.ts",
                "src/types/languages.ts",
                "data/scripts/translation_pipeline.py",
            ],
            files_to_modify: &[],
            tests: &[],
            verification: &[
                "Translation service ready",
                "Language codes defined",
                "Pipeline functional",
            ],
        },
    ],
};

static PHASE4: PlanEntry = PlanEntry {
    name: "Platform Maturity",
    duration: "8 weeks",
    prerequisites: &["Phase 3 completed", "Production infrastructure", "Monitoring tools"],
    steps: &[
        StepEntry {
            id: "4.1",
            name: "Plugin Architecture",
            duration: "8 hours",
            description: "Design and implement plugin system",
            files_to_create: &[
                "src/plugins/plugin-api.ts",
                "src/plugins/plugin-manager.ts",
                "docs/PLUGIN_DEVELOPMENT.md",
            ],
            files_to_modify: &[],
            tests: &[],
            verification: &["Plugin loading works", "API documented", "Example plugin created"],
        },
    ],
};

static PHASE5: PlanEntry = PlanEntry {
    name: "AI Enhancement",
    duration: "12 weeks",
    prerequisites: &["Phase 4 completed", "AI API access", "Context infrastructure"],
    steps: &[
        StepEntry {
            id: "5.1",
            name: "Context Analysis System",
            duration: "8 hours",
            description: "Implement AI-based context analysis for definition ranking",
            files_to_create: &[
                "api/src/services/ai-context.ts",
                "api/src/models/context-analyzer.ts",
            ],
            files_to_modify: &[],
            tests: &[],
            verification: &["Context extraction works", "AI API integrated", "Fallback mechanisms"],
        },
    ],
};

static PHASE6: PlanEntry = PlanEntry {
    name: "Ecosystem Building",
    duration: "12 weeks",
    prerequisites: &["Phase 5 completed", "Stable platform", "Developer documentation"],
    steps: &[
        StepEntry {
            id: "6.1",
            name: "Public API Development",
            duration: "8 hours",
            description: "Create public API for third-party developers",
            files_to_create: &["api/src/public-api/index.ts", "docs/PUBLIC_API.md"],
            files_to_modify: &[],
            tests: &[],
            verification: &["API endpoints work", "Rate limiting", "Documentation complete"],
        },
    ],
};
