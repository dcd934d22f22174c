//! Static capability listing for the wrapped Supabase MCP server.
//!
//! These lines describe the external server's tools, not anything this
//! binary implements; they are shown for manual inspection after launch.

const CAPABILITY_LISTING: &str = "\
Server capabilities:
- Database query tools
  - get_db_schemas: Lists all database schemas with their sizes and table counts
  - get_tables: Lists all tables in a schema with their sizes, row counts, and metadata
  - get_table_schema: Gets detailed table structure including columns, keys, and relationships
  - execute_sql_query: Executes raw SQL queries with comprehensive support for all PostgreSQL operations
- Management API tools
  - send_management_api_request: Send arbitrary requests to Supabase Management API
  - get_management_api_spec: Get the enriched API specification with safety information
  - get_management_api_safety_rules: Get all safety rules including blocked and unsafe operations
  - live_dangerously: Switch between safe and unsafe modes
- Auth Admin tools
  - get_auth_admin_methods_spec: Retrieve documentation for all available Auth Admin methods
  - call_auth_admin_method: Directly invoke Auth Admin methods with proper parameter handling";

/// The capability listing printed once after the liveness check passes.
pub fn capability_listing() -> &'static str {
    CAPABILITY_LISTING
}
