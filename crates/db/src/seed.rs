//! The default fourteen-slide deck.
//!
//! Inserted by [`SlideRepo::seed_default_deck`] when a list finds the
//! store empty. `display_order` is the entry's position in this list.
//!
//! [`SlideRepo::seed_default_deck`]: crate::repositories::SlideRepo::seed_default_deck

use crate::models::slide::SlideLayout;

/// One predefined slide: title, markdown content, layout.
pub struct DeckEntry {
    pub title: &'static str,
    pub content: &'static str,
    pub layout: SlideLayout,
}

/// The deck inserted into an empty store, in display order.
pub const DEFAULT_DECK: &[DeckEntry] = &[
    DeckEntry {
        title: "Markdown Slide Deck Application",
        content: r#"# Markdown Slide Deck Application

## Architecture, Design & Development Journey

Built with React, Rust, and PostgreSQL

A comprehensive overview of our presentation application"#,
        layout: SlideLayout::Title,
    },
    DeckEntry {
        title: "Application Architecture",
        content: r#"## Application Architecture

### Frontend Stack
- React 18 with TypeScript
- Tailwind CSS for styling
- Tanstack Query for data fetching
- Vite as build tool

### Backend Stack
- Rust with axum
- PostgreSQL database with sqlx
- RESTful API design
- CORS enabled for cross-origin requests"#,
        layout: SlideLayout::TwoColumn,
    },
    DeckEntry {
        title: "System Components",
        content: r#"## Key System Components

### Core Components
- SlideDeck - Main presentation container
- SlideRenderer - Markdown to React rendering
- SlideEditor - Live markdown editor
- SlideNavigation - Presentation controls

### Services & Utilities
- slideService - API communication layer
- MarkdownParser - AST generation & layout detection
- apiService - HTTP request abstraction

### Database Layer
- Slide model with sqlx
- UUID primary keys for scalability
- Timestamps for audit trails"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Data Flow Architecture",
        content: r#"## Data Flow Architecture

```mermaid
graph TD
    A[React Frontend] --> B[Tanstack Query]
    B --> C[slideService]
    C --> D[API Service]
    D --> E[axum Router]
    E --> F[Slide Handlers]
    F --> G[Slide Repository]
    G --> H[PostgreSQL Database]

    I[Markdown Content] --> J[MarkdownParser]
    J --> K[AST Nodes]
    K --> L[SlideRenderer]
    L --> M[Rendered UI]
```"#,
        layout: SlideLayout::Code,
    },
    DeckEntry {
        title: "Design Considerations",
        content: r#"## Key Design Decisions

### 1. Markdown-First Approach
- Why: Universal format, easy to learn
- Future: Export to other formats (PDF, PPTX)

### 2. Real-time Preview
- Why: Immediate feedback improves UX
- Implementation: Live parsing and rendering

### 3. Layout Auto-detection
- Why: Reduces manual configuration
- Algorithm: AST analysis for optimal layouts

### 4. RESTful API Design
- Why: Standard, scalable, cacheable
- Future: GraphQL for complex queries"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Database Design Choices",
        content: r#"## Database Architecture

### PostgreSQL Selection
- Pros: Per-statement consistency, native enums, UUID support
- Cons: Heavier than an embedded store for demos
- Migrations: Versioned SQL applied at startup

### Schema Design
```sql
CREATE TABLE slides (
  id UUID PRIMARY KEY,
  title TEXT NOT NULL,
  content TEXT NOT NULL,
  layout slide_layout NOT NULL,
  display_order INTEGER NOT NULL,
  created_at TIMESTAMPTZ,
  updated_at TIMESTAMPTZ
);
```"#,
        layout: SlideLayout::Code,
    },
    DeckEntry {
        title: "State Management Strategy",
        content: r#"## State Management Approach

### Tanstack Query Benefits
- Server State: Automatic caching & synchronization
- Optimistic Updates: Better perceived performance
- Error Handling: Built-in retry mechanisms
- Background Refetching: Always fresh data

### Local State
- React useState: Component-level state
- No Redux: Avoided complexity for this scope
- Future: Consider Zustand for complex client state"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Key Technical Challenges",
        content: r#"## Development Challenges

### 1. Markdown Parsing Complexity
- Challenge: Converting markdown to structured AST
- Solution: Custom parser with layout detection
- Learning: Regex patterns for markdown syntax

### 2. Real-time Editor Performance
- Challenge: Re-parsing on every keystroke
- Solution: Debounced updates and memoization
- Future: Web Workers for heavy parsing

### 3. Slide Synchronization
- Challenge: Frontend-backend state consistency
- Solution: Tanstack Query invalidation strategy
- Learning: Optimistic updates vs data integrity"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Code Quality Decisions",
        content: r#"## Code Quality & Maintainability

### Type Safety Across the Stack
- Typed request structs for every operation
- Enum layouts enforced in both Rust and SQL
- TypeScript interfaces on the frontend

### Layered Architecture
- Handlers translate HTTP, repositories own SQL
- Single Responsibility - focused modules
- Service layer abstraction over raw fetch calls

### Error Handling Strategy
- Graceful degradation - fallback to empty states
- User-friendly messages - no technical jargon
- Structured logging - debugging and monitoring"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Performance Optimizations",
        content: r#"## Performance Considerations

### Frontend Optimizations
- React.memo for expensive renders
- useCallback for stable function references
- Lazy loading for large presentations
- Virtualization planned for 100+ slides

### Backend Optimizations
- Database index on the display order
- Connection pooling for concurrent requests
- Response compression for large content
- Caching headers for static assets"#,
        layout: SlideLayout::TwoColumn,
    },
    DeckEntry {
        title: "Security & Scalability",
        content: r#"## Security & Future Scale

### Current Security Measures
- Input sanitization for markdown content
- CORS configuration for cross-origin safety
- Request timeouts and panic recovery
- Request size limits to prevent abuse

### Scalability Considerations
- Stateless API design for horizontal scaling
- Database abstraction for easy migration
- Modular frontend for code splitting
- CDN-ready static asset organization"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Future Roadmap",
        content: r#"## Planned Enhancements

### Short-term Features
- Slide templates for quick start
- Image upload and media management
- Export functionality (PDF, images)
- Presentation sharing via public links

### Long-term Vision
- Collaborative editing with real-time sync
- Plugin system for custom components
- Analytics dashboard for presentation insights
- Mobile app for remote presentation control"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Key Takeaways",
        content: r#"## Development Insights

### Technical Learnings
- Markdown parsing is more complex than expected
- Real-time updates require careful state management
- Strong typing significantly improves development speed
- Composition scales better than inheritance

### Process Insights
- Start simple - one table before many
- User feedback early - live preview was crucial
- Performance later - functionality first approach
- Documentation - self-documenting code wins

### Architecture Wins
- Repository abstraction enabled easy testing
- Type safety caught bugs before runtime
- Modular design made refactoring painless"#,
        layout: SlideLayout::Content,
    },
    DeckEntry {
        title: "Thank You!",
        content: r#"# Questions & Discussion

## This presentation was created using our own application!

### Key Stats
- 14 slides generated from markdown
- Auto-detected layouts for optimal presentation
- Real-time editing capabilities demonstrated
- Full-stack solution from database to UI

Demonstrating the power of markdown-driven presentations"#,
        layout: SlideLayout::Title,
    },
];
