// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the registry snapshot it was generated from
// - Run `semconv-codegen generate`

//! # Metric Semantic Conventions
//!
//! Name, unit and description constants of the metrics defined by the
//! semantic convention registry, ordered by metric name.
//!
//! Metrics that are not stable yet are only compiled with the
//! `semconv_experimental` feature enabled.

/// ## Description
///
/// Number of exceptions caught by exception handling middleware.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Diagnostics`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{exception}` |
/// | Status: | `Stable` |
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTIONS_NAME: &str = "aspnetcore.diagnostics.exceptions";
/// Unit of [`ASPNETCORE_DIAGNOSTICS_EXCEPTIONS_NAME`].
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTIONS_UNIT: &str = "{exception}";
/// Description of [`ASPNETCORE_DIAGNOSTICS_EXCEPTIONS_NAME`].
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTIONS_DESCRIPTION: &str =
    "Number of exceptions caught by exception handling middleware.";

/// ## Description
///
/// Number of requests that are currently active on the server that hold a rate limiting lease.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.RateLimiting`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Stable` |
pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_NAME: &str =
    "aspnetcore.rate_limiting.active_request_leases";
/// Unit of [`ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_NAME`].
pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_UNIT: &str = "{request}";
/// Description of [`ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_NAME`].
pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_DESCRIPTION: &str =
    "Number of requests that are currently active on the server that hold a rate limiting lease.";

/// ## Description
///
/// Number of requests that are currently queued, waiting to acquire a rate limiting lease.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.RateLimiting`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Stable` |
pub const ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS_NAME: &str =
    "aspnetcore.rate_limiting.queued_requests";
/// Unit of [`ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS_NAME`].
pub const ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS_UNIT: &str = "{request}";
/// Description of [`ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS_NAME`].
pub const ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS_DESCRIPTION: &str =
    "Number of requests that are currently queued, waiting to acquire a rate limiting lease.";

/// ## Description
///
/// The time the request spent in a queue waiting to acquire a rate limiting lease.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.RateLimiting`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE_NAME: &str =
    "aspnetcore.rate_limiting.request.time_in_queue";
/// Unit of [`ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE_UNIT: &str = "s";
/// Description of [`ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE_DESCRIPTION: &str =
    "The time the request spent in a queue waiting to acquire a rate limiting lease.";

/// ## Description
///
/// The duration of rate limiting lease held by requests on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.RateLimiting`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION_NAME: &str =
    "aspnetcore.rate_limiting.request_lease.duration";
/// Unit of [`ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION_UNIT: &str = "s";
/// Description of [`ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION_DESCRIPTION: &str =
    "The duration of rate limiting lease held by requests on the server.";

/// ## Description
///
/// Number of requests that tried to acquire a rate limiting lease.
///
/// ## Notes
///
/// Requests could be:
///
/// - Rejected by global or endpoint rate limiting policies
/// - Canceled while waiting for the lease.
///
/// Meter name: `Microsoft.AspNetCore.RateLimiting`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{request}` |
/// | Status: | `Stable` |
pub const ASPNETCORE_RATE_LIMITING_REQUESTS_NAME: &str = "aspnetcore.rate_limiting.requests";
/// Unit of [`ASPNETCORE_RATE_LIMITING_REQUESTS_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUESTS_UNIT: &str = "{request}";
/// Description of [`ASPNETCORE_RATE_LIMITING_REQUESTS_NAME`].
pub const ASPNETCORE_RATE_LIMITING_REQUESTS_DESCRIPTION: &str =
    "Number of requests that tried to acquire a rate limiting lease.";

/// ## Description
///
/// Number of requests that were attempted to be matched to an endpoint.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Routing`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{match_attempt}` |
/// | Status: | `Stable` |
pub const ASPNETCORE_ROUTING_MATCH_ATTEMPTS_NAME: &str = "aspnetcore.routing.match_attempts";
/// Unit of [`ASPNETCORE_ROUTING_MATCH_ATTEMPTS_NAME`].
pub const ASPNETCORE_ROUTING_MATCH_ATTEMPTS_UNIT: &str = "{match_attempt}";
/// Description of [`ASPNETCORE_ROUTING_MATCH_ATTEMPTS_NAME`].
pub const ASPNETCORE_ROUTING_MATCH_ATTEMPTS_DESCRIPTION: &str =
    "Number of requests that were attempted to be matched to an endpoint.";

/// ## Description
///
/// Number of active client instances
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{instance}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT_NAME: &str =
    "azure.cosmosdb.client.active_instance.count";
/// Unit of [`AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT_UNIT: &str = "{instance}";
/// Description of [`AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT_DESCRIPTION: &str =
    "Number of active client instances";

/// ## Description
///
/// [Request units](https://learn.microsoft.com/azure/cosmos-db/request-units) consumed by the operation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `{request_unit}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE_NAME: &str =
    "azure.cosmosdb.client.operation.request_charge";
/// Unit of [`AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE_UNIT: &str = "{request_unit}";
/// Description of [`AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE_DESCRIPTION: &str =
    "[Request units](https://learn.microsoft.com/azure/cosmos-db/request-units) consumed by the operation";

/// ## Description
///
/// Total CPU time consumed
///
/// ## Notes
///
/// Total CPU time consumed by the specific container on all available CPU cores
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_TIME_NAME: &str = "container.cpu.time";
/// Unit of [`CONTAINER_CPU_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_TIME_UNIT: &str = "s";
/// Description of [`CONTAINER_CPU_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_TIME_DESCRIPTION: &str = "Total CPU time consumed";

/// ## Description
///
/// Container's CPU usage, measured in cpus. Range from 0 to the number of allocatable CPUs
///
/// ## Notes
///
/// CPU usage of the specific container on all available CPU cores, averaged over the sample window
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `{cpu}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_USAGE_NAME: &str = "container.cpu.usage";
/// Unit of [`CONTAINER_CPU_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_USAGE_UNIT: &str = "{cpu}";
/// Description of [`CONTAINER_CPU_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_USAGE_DESCRIPTION: &str =
    "Container's CPU usage, measured in cpus. Range from 0 to the number of allocatable CPUs";

/// ## Description
///
/// Disk bytes for the container.
///
/// ## Notes
///
/// The total number of bytes read/written successfully (aggregated from all disks)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_DISK_IO_NAME: &str = "container.disk.io";
/// Unit of [`CONTAINER_DISK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_DISK_IO_UNIT: &str = "By";
/// Description of [`CONTAINER_DISK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_DISK_IO_DESCRIPTION: &str = "Disk bytes for the container.";

/// ## Description
///
/// Memory usage of the container.
///
/// ## Notes
///
/// Memory usage of the container
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_MEMORY_USAGE_NAME: &str = "container.memory.usage";
/// Unit of [`CONTAINER_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_MEMORY_USAGE_UNIT: &str = "By";
/// Description of [`CONTAINER_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_MEMORY_USAGE_DESCRIPTION: &str = "Memory usage of the container.";

/// ## Description
///
/// Network bytes for the container.
///
/// ## Notes
///
/// The number of bytes sent/received on all network interfaces by the container
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_NETWORK_IO_NAME: &str = "container.network.io";
/// Unit of [`CONTAINER_NETWORK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_NETWORK_IO_UNIT: &str = "By";
/// Description of [`CONTAINER_NETWORK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_NETWORK_IO_DESCRIPTION: &str = "Network bytes for the container.";

/// ## Description
///
/// The time the container has been running
///
/// ## Notes
///
/// Instrumentations SHOULD use a gauge with type `double` and measure uptime in seconds as a floating point number with the highest precision available.
/// The actual accuracy would depend on the instrumentation and operating system
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_UPTIME_NAME: &str = "container.uptime";
/// Unit of [`CONTAINER_UPTIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_UPTIME_UNIT: &str = "s";
/// Description of [`CONTAINER_UPTIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_UPTIME_DESCRIPTION: &str = "The time the container has been running";

/// ## Description
///
/// The number of connections that are currently in state described by the `state` attribute
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_COUNT_NAME: &str = "db.client.connection.count";
/// Unit of [`DB_CLIENT_CONNECTION_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_COUNT_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTION_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_COUNT_DESCRIPTION: &str =
    "The number of connections that are currently in state described by the `state` attribute";

/// ## Description
///
/// The time it took to create a new connection
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_CREATE_TIME_NAME: &str = "db.client.connection.create_time";
/// Unit of [`DB_CLIENT_CONNECTION_CREATE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_CREATE_TIME_UNIT: &str = "s";
/// Description of [`DB_CLIENT_CONNECTION_CREATE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_CREATE_TIME_DESCRIPTION: &str =
    "The time it took to create a new connection";

/// ## Description
///
/// The maximum number of idle open connections allowed
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MAX_NAME: &str = "db.client.connection.idle.max";
/// Unit of [`DB_CLIENT_CONNECTION_IDLE_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MAX_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTION_IDLE_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MAX_DESCRIPTION: &str =
    "The maximum number of idle open connections allowed";

/// ## Description
///
/// The minimum number of idle open connections allowed
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MIN_NAME: &str = "db.client.connection.idle.min";
/// Unit of [`DB_CLIENT_CONNECTION_IDLE_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MIN_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTION_IDLE_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MIN_DESCRIPTION: &str =
    "The minimum number of idle open connections allowed";

/// ## Description
///
/// The maximum number of open connections allowed
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_MAX_NAME: &str = "db.client.connection.max";
/// Unit of [`DB_CLIENT_CONNECTION_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_MAX_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTION_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_MAX_DESCRIPTION: &str =
    "The maximum number of open connections allowed";

/// ## Description
///
/// The number of current pending requests for an open connection
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_PENDING_REQUESTS_NAME: &str =
    "db.client.connection.pending_requests";
/// Unit of [`DB_CLIENT_CONNECTION_PENDING_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_PENDING_REQUESTS_UNIT: &str = "{request}";
/// Description of [`DB_CLIENT_CONNECTION_PENDING_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_PENDING_REQUESTS_DESCRIPTION: &str =
    "The number of current pending requests for an open connection";

/// ## Description
///
/// The number of connection timeouts that have occurred trying to obtain a connection from the pool
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{timeout}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_TIMEOUTS_NAME: &str = "db.client.connection.timeouts";
/// Unit of [`DB_CLIENT_CONNECTION_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_TIMEOUTS_UNIT: &str = "{timeout}";
/// Description of [`DB_CLIENT_CONNECTION_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_TIMEOUTS_DESCRIPTION: &str =
    "The number of connection timeouts that have occurred trying to obtain a connection from the pool";

/// ## Description
///
/// The time between borrowing a connection and returning it to the pool
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_USE_TIME_NAME: &str = "db.client.connection.use_time";
/// Unit of [`DB_CLIENT_CONNECTION_USE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_USE_TIME_UNIT: &str = "s";
/// Description of [`DB_CLIENT_CONNECTION_USE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_USE_TIME_DESCRIPTION: &str =
    "The time between borrowing a connection and returning it to the pool";

/// ## Description
///
/// The time it took to obtain an open connection from the pool
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_WAIT_TIME_NAME: &str = "db.client.connection.wait_time";
/// Unit of [`DB_CLIENT_CONNECTION_WAIT_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_WAIT_TIME_UNIT: &str = "s";
/// Description of [`DB_CLIENT_CONNECTION_WAIT_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_WAIT_TIME_DESCRIPTION: &str =
    "The time it took to obtain an open connection from the pool";

/// ## Description
///
/// Deprecated, use `db.client.connection.create_time` instead. Note: the unit also changed from `ms` to `s`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `ms` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.create_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_CREATE_TIME_NAME: &str = "db.client.connections.create_time";
/// Unit of [`DB_CLIENT_CONNECTIONS_CREATE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.create_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_CREATE_TIME_UNIT: &str = "ms";
/// Description of [`DB_CLIENT_CONNECTIONS_CREATE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.create_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_CREATE_TIME_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.create_time` instead. Note: the unit also changed from `ms` to `s`";

/// ## Description
///
/// Deprecated, use `db.client.connection.idle.max` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.max`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MAX_NAME: &str = "db.client.connections.idle.max";
/// Unit of [`DB_CLIENT_CONNECTIONS_IDLE_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.max`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MAX_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTIONS_IDLE_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.max`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MAX_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.idle.max` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.idle.min` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.min`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MIN_NAME: &str = "db.client.connections.idle.min";
/// Unit of [`DB_CLIENT_CONNECTIONS_IDLE_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.min`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MIN_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTIONS_IDLE_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.min`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MIN_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.idle.min` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.max` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.max`.")]
pub const DB_CLIENT_CONNECTIONS_MAX_NAME: &str = "db.client.connections.max";
/// Unit of [`DB_CLIENT_CONNECTIONS_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.max`.")]
pub const DB_CLIENT_CONNECTIONS_MAX_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTIONS_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.max`.")]
pub const DB_CLIENT_CONNECTIONS_MAX_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.max` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.pending_requests` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pending_requests`.")]
pub const DB_CLIENT_CONNECTIONS_PENDING_REQUESTS_NAME: &str =
    "db.client.connections.pending_requests";
/// Unit of [`DB_CLIENT_CONNECTIONS_PENDING_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pending_requests`.")]
pub const DB_CLIENT_CONNECTIONS_PENDING_REQUESTS_UNIT: &str = "{request}";
/// Description of [`DB_CLIENT_CONNECTIONS_PENDING_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pending_requests`.")]
pub const DB_CLIENT_CONNECTIONS_PENDING_REQUESTS_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.pending_requests` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.timeouts` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{timeout}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.timeouts`.")]
pub const DB_CLIENT_CONNECTIONS_TIMEOUTS_NAME: &str = "db.client.connections.timeouts";
/// Unit of [`DB_CLIENT_CONNECTIONS_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.timeouts`.")]
pub const DB_CLIENT_CONNECTIONS_TIMEOUTS_UNIT: &str = "{timeout}";
/// Description of [`DB_CLIENT_CONNECTIONS_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.timeouts`.")]
pub const DB_CLIENT_CONNECTIONS_TIMEOUTS_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.timeouts` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.count` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.count`.")]
pub const DB_CLIENT_CONNECTIONS_USAGE_NAME: &str = "db.client.connections.usage";
/// Unit of [`DB_CLIENT_CONNECTIONS_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.count`.")]
pub const DB_CLIENT_CONNECTIONS_USAGE_UNIT: &str = "{connection}";
/// Description of [`DB_CLIENT_CONNECTIONS_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.count`.")]
pub const DB_CLIENT_CONNECTIONS_USAGE_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.count` instead";

/// ## Description
///
/// Deprecated, use `db.client.connection.use_time` instead. Note: the unit also changed from `ms` to `s`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `ms` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.use_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_USE_TIME_NAME: &str = "db.client.connections.use_time";
/// Unit of [`DB_CLIENT_CONNECTIONS_USE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.use_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_USE_TIME_UNIT: &str = "ms";
/// Description of [`DB_CLIENT_CONNECTIONS_USE_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.use_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_USE_TIME_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.use_time` instead. Note: the unit also changed from `ms` to `s`";

/// ## Description
///
/// Deprecated, use `db.client.connection.wait_time` instead. Note: the unit also changed from `ms` to `s`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `ms` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.wait_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_WAIT_TIME_NAME: &str = "db.client.connections.wait_time";
/// Unit of [`DB_CLIENT_CONNECTIONS_WAIT_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.wait_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_WAIT_TIME_UNIT: &str = "ms";
/// Description of [`DB_CLIENT_CONNECTIONS_WAIT_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by `db.client.connection.wait_time`. The unit also changed from `ms` to `s`."
)]
pub const DB_CLIENT_CONNECTIONS_WAIT_TIME_DESCRIPTION: &str =
    "Deprecated, use `db.client.connection.wait_time` instead. Note: the unit also changed from `ms` to `s`";

/// ## Description
///
/// Deprecated, use `azure.cosmosdb.client.active_instance.count` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{instance}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.active_instance.count`.")]
pub const DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT_NAME: &str =
    "db.client.cosmosdb.active_instance.count";
/// Unit of [`DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.active_instance.count`.")]
pub const DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT_UNIT: &str = "{instance}";
/// Description of [`DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.active_instance.count`.")]
pub const DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT_DESCRIPTION: &str =
    "Deprecated, use `azure.cosmosdb.client.active_instance.count` instead";

/// ## Description
///
/// Deprecated, use `azure.cosmosdb.client.operation.request_charge` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `{request_unit}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.operation.request_charge`.")]
pub const DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE_NAME: &str =
    "db.client.cosmosdb.operation.request_charge";
/// Unit of [`DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.operation.request_charge`.")]
pub const DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE_UNIT: &str = "{request_unit}";
/// Description of [`DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.operation.request_charge`.")]
pub const DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE_DESCRIPTION: &str =
    "Deprecated, use `azure.cosmosdb.client.operation.request_charge` instead";

/// ## Description
///
/// Duration of database client operations.
///
/// ## Notes
///
/// Batch operations SHOULD be recorded as a single operation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Release candidate` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_OPERATION_DURATION_NAME: &str = "db.client.operation.duration";
/// Unit of [`DB_CLIENT_OPERATION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_OPERATION_DURATION_UNIT: &str = "s";
/// Description of [`DB_CLIENT_OPERATION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_OPERATION_DURATION_DESCRIPTION: &str =
    "Duration of database client operations.";

/// ## Description
///
/// The actual number of records returned by the database operation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `{row}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_RESPONSE_RETURNED_ROWS_NAME: &str = "db.client.response.returned_rows";
/// Unit of [`DB_CLIENT_RESPONSE_RETURNED_ROWS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_RESPONSE_RETURNED_ROWS_UNIT: &str = "{row}";
/// Description of [`DB_CLIENT_RESPONSE_RETURNED_ROWS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_RESPONSE_RETURNED_ROWS_DESCRIPTION: &str =
    "The actual number of records returned by the database operation";

/// ## Description
///
/// The number of .NET assemblies that are currently loaded.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`AppDomain.CurrentDomain.GetAssemblies().Length`](https://learn.microsoft.com/dotnet/api/system.appdomain.getassemblies)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{assembly}` |
/// | Status: | `Stable` |
pub const DOTNET_ASSEMBLY_COUNT_NAME: &str = "dotnet.assembly.count";
/// Unit of [`DOTNET_ASSEMBLY_COUNT_NAME`].
pub const DOTNET_ASSEMBLY_COUNT_UNIT: &str = "{assembly}";
/// Description of [`DOTNET_ASSEMBLY_COUNT_NAME`].
pub const DOTNET_ASSEMBLY_COUNT_DESCRIPTION: &str =
    "The number of .NET assemblies that are currently loaded.";

/// ## Description
///
/// The number of exceptions that have been thrown in managed code.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as counting calls to [`AppDomain.CurrentDomain.FirstChanceException`](https://learn.microsoft.com/dotnet/api/system.appdomain.firstchanceexception)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{exception}` |
/// | Status: | `Stable` |
pub const DOTNET_EXCEPTIONS_NAME: &str = "dotnet.exceptions";
/// Unit of [`DOTNET_EXCEPTIONS_NAME`].
pub const DOTNET_EXCEPTIONS_UNIT: &str = "{exception}";
/// Description of [`DOTNET_EXCEPTIONS_NAME`].
pub const DOTNET_EXCEPTIONS_DESCRIPTION: &str =
    "The number of exceptions that have been thrown in managed code.";

/// ## Description
///
/// The number of garbage collections that have occurred since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric uses the [`GC.CollectionCount(int generation)`](https://learn.microsoft.com/dotnet/api/system.gc.collectioncount) API to calculate exclusive collections per generation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{collection}` |
/// | Status: | `Stable` |
pub const DOTNET_GC_COLLECTIONS_NAME: &str = "dotnet.gc.collections";
/// Unit of [`DOTNET_GC_COLLECTIONS_NAME`].
pub const DOTNET_GC_COLLECTIONS_UNIT: &str = "{collection}";
/// Description of [`DOTNET_GC_COLLECTIONS_NAME`].
pub const DOTNET_GC_COLLECTIONS_DESCRIPTION: &str =
    "The number of garbage collections that have occurred since the process has started.";

/// ## Description
///
/// The *approximate* number of bytes allocated on the managed GC heap since the process has started. The returned value does not include any native allocations.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`GC.GetTotalAllocatedBytes()`](https://learn.microsoft.com/dotnet/api/system.gc.gettotalallocatedbytes)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_GC_HEAP_TOTAL_ALLOCATED_NAME: &str = "dotnet.gc.heap.total_allocated";
/// Unit of [`DOTNET_GC_HEAP_TOTAL_ALLOCATED_NAME`].
pub const DOTNET_GC_HEAP_TOTAL_ALLOCATED_UNIT: &str = "By";
/// Description of [`DOTNET_GC_HEAP_TOTAL_ALLOCATED_NAME`].
pub const DOTNET_GC_HEAP_TOTAL_ALLOCATED_DESCRIPTION: &str =
    "The *approximate* number of bytes allocated on the managed GC heap since the process has started. The returned value does not include any native allocations.";

/// ## Description
///
/// The heap fragmentation, as observed during the latest garbage collection.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`GC.GetGCMemoryInfo().GenerationInfo.FragmentationAfterBytes`](https://learn.microsoft.com/dotnet/api/system.gcgenerationinfo.fragmentationafterbytes)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE_NAME: &str =
    "dotnet.gc.last_collection.heap.fragmentation.size";
/// Unit of [`DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE_UNIT: &str = "By";
/// Description of [`DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE_DESCRIPTION: &str =
    "The heap fragmentation, as observed during the latest garbage collection.";

/// ## Description
///
/// The managed GC heap size (including fragmentation), as observed during the latest garbage collection.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`GC.GetGCMemoryInfo().GenerationInfo.SizeAfterBytes`](https://learn.microsoft.com/dotnet/api/system.gcgenerationinfo.sizeafterbytes)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_GC_LAST_COLLECTION_HEAP_SIZE_NAME: &str = "dotnet.gc.last_collection.heap.size";
/// Unit of [`DOTNET_GC_LAST_COLLECTION_HEAP_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_HEAP_SIZE_UNIT: &str = "By";
/// Description of [`DOTNET_GC_LAST_COLLECTION_HEAP_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_HEAP_SIZE_DESCRIPTION: &str =
    "The managed GC heap size (including fragmentation), as observed during the latest garbage collection.";

/// ## Description
///
/// The amount of committed virtual memory in use by the .NET GC, as observed during the latest garbage collection.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`GC.GetGCMemoryInfo().TotalCommittedBytes`](https://learn.microsoft.com/dotnet/api/system.gcmemoryinfo.totalcommittedbytes). Committed virtual memory may be larger than the heap size because it includes both memory for storing existing objects (the heap size) and some extra memory that is ready to handle newly allocated objects in the future
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE_NAME: &str =
    "dotnet.gc.last_collection.memory.committed_size";
/// Unit of [`DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE_UNIT: &str = "By";
/// Description of [`DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE_NAME`].
pub const DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE_DESCRIPTION: &str =
    "The amount of committed virtual memory in use by the .NET GC, as observed during the latest garbage collection.";

/// ## Description
///
/// The total amount of time paused in GC since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`GC.GetTotalPauseDuration()`](https://learn.microsoft.com/dotnet/api/system.gc.gettotalpauseduration)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const DOTNET_GC_PAUSE_TIME_NAME: &str = "dotnet.gc.pause.time";
/// Unit of [`DOTNET_GC_PAUSE_TIME_NAME`].
pub const DOTNET_GC_PAUSE_TIME_UNIT: &str = "s";
/// Description of [`DOTNET_GC_PAUSE_TIME_NAME`].
pub const DOTNET_GC_PAUSE_TIME_DESCRIPTION: &str =
    "The total amount of time paused in GC since the process has started.";

/// ## Description
///
/// The amount of time the JIT compiler has spent compiling methods since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`JitInfo.GetCompilationTime()`](https://learn.microsoft.com/dotnet/api/system.runtime.jitinfo.getcompilationtime)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const DOTNET_JIT_COMPILATION_TIME_NAME: &str = "dotnet.jit.compilation.time";
/// Unit of [`DOTNET_JIT_COMPILATION_TIME_NAME`].
pub const DOTNET_JIT_COMPILATION_TIME_UNIT: &str = "s";
/// Description of [`DOTNET_JIT_COMPILATION_TIME_NAME`].
pub const DOTNET_JIT_COMPILATION_TIME_DESCRIPTION: &str =
    "The amount of time the JIT compiler has spent compiling methods since the process has started.";

/// ## Description
///
/// Count of bytes of intermediate language that have been compiled since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`JitInfo.GetCompiledILBytes()`](https://learn.microsoft.com/dotnet/api/system.runtime.jitinfo.getcompiledilbytes)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_JIT_COMPILED_IL_SIZE_NAME: &str = "dotnet.jit.compiled_il.size";
/// Unit of [`DOTNET_JIT_COMPILED_IL_SIZE_NAME`].
pub const DOTNET_JIT_COMPILED_IL_SIZE_UNIT: &str = "By";
/// Description of [`DOTNET_JIT_COMPILED_IL_SIZE_NAME`].
pub const DOTNET_JIT_COMPILED_IL_SIZE_DESCRIPTION: &str =
    "Count of bytes of intermediate language that have been compiled since the process has started.";

/// ## Description
///
/// The number of times the JIT compiler (re)compiled methods since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`JitInfo.GetCompiledMethodCount()`](https://learn.microsoft.com/dotnet/api/system.runtime.jitinfo.getcompiledmethodcount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{method}` |
/// | Status: | `Stable` |
pub const DOTNET_JIT_COMPILED_METHODS_NAME: &str = "dotnet.jit.compiled_methods";
/// Unit of [`DOTNET_JIT_COMPILED_METHODS_NAME`].
pub const DOTNET_JIT_COMPILED_METHODS_UNIT: &str = "{method}";
/// Description of [`DOTNET_JIT_COMPILED_METHODS_NAME`].
pub const DOTNET_JIT_COMPILED_METHODS_DESCRIPTION: &str =
    "The number of times the JIT compiler (re)compiled methods since the process has started.";

/// ## Description
///
/// The number of times there was contention when trying to acquire a monitor lock since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`Monitor.LockContentionCount`](https://learn.microsoft.com/dotnet/api/system.threading.monitor.lockcontentioncount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{contention}` |
/// | Status: | `Stable` |
pub const DOTNET_MONITOR_LOCK_CONTENTIONS_NAME: &str = "dotnet.monitor.lock_contentions";
/// Unit of [`DOTNET_MONITOR_LOCK_CONTENTIONS_NAME`].
pub const DOTNET_MONITOR_LOCK_CONTENTIONS_UNIT: &str = "{contention}";
/// Description of [`DOTNET_MONITOR_LOCK_CONTENTIONS_NAME`].
pub const DOTNET_MONITOR_LOCK_CONTENTIONS_DESCRIPTION: &str =
    "The number of times there was contention when trying to acquire a monitor lock since the process has started.";

/// ## Description
///
/// The number of processors available to the process.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as accessing [`Environment.ProcessorCount`](https://learn.microsoft.com/dotnet/api/system.environment.processorcount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{cpu}` |
/// | Status: | `Stable` |
pub const DOTNET_PROCESS_CPU_COUNT_NAME: &str = "dotnet.process.cpu.count";
/// Unit of [`DOTNET_PROCESS_CPU_COUNT_NAME`].
pub const DOTNET_PROCESS_CPU_COUNT_UNIT: &str = "{cpu}";
/// Description of [`DOTNET_PROCESS_CPU_COUNT_NAME`].
pub const DOTNET_PROCESS_CPU_COUNT_DESCRIPTION: &str =
    "The number of processors available to the process.";

/// ## Description
///
/// CPU time used by the process.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as accessing the corresponding processor time properties on [`System.Diagnostics.Process`](https://learn.microsoft.com/dotnet/api/system.diagnostics.process)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const DOTNET_PROCESS_CPU_TIME_NAME: &str = "dotnet.process.cpu.time";
/// Unit of [`DOTNET_PROCESS_CPU_TIME_NAME`].
pub const DOTNET_PROCESS_CPU_TIME_UNIT: &str = "s";
/// Description of [`DOTNET_PROCESS_CPU_TIME_NAME`].
pub const DOTNET_PROCESS_CPU_TIME_DESCRIPTION: &str = "CPU time used by the process.";

/// ## Description
///
/// The number of bytes of physical memory mapped to the process context.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`Environment.WorkingSet`](https://learn.microsoft.com/dotnet/api/system.environment.workingset)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const DOTNET_PROCESS_MEMORY_WORKING_SET_NAME: &str = "dotnet.process.memory.working_set";
/// Unit of [`DOTNET_PROCESS_MEMORY_WORKING_SET_NAME`].
pub const DOTNET_PROCESS_MEMORY_WORKING_SET_UNIT: &str = "By";
/// Description of [`DOTNET_PROCESS_MEMORY_WORKING_SET_NAME`].
pub const DOTNET_PROCESS_MEMORY_WORKING_SET_DESCRIPTION: &str =
    "The number of bytes of physical memory mapped to the process context.";

/// ## Description
///
/// The number of work items that are currently queued to be processed by the thread pool.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`ThreadPool.PendingWorkItemCount`](https://learn.microsoft.com/dotnet/api/system.threading.threadpool.pendingworkitemcount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{work_item}` |
/// | Status: | `Stable` |
pub const DOTNET_THREAD_POOL_QUEUE_LENGTH_NAME: &str = "dotnet.thread_pool.queue.length";
/// Unit of [`DOTNET_THREAD_POOL_QUEUE_LENGTH_NAME`].
pub const DOTNET_THREAD_POOL_QUEUE_LENGTH_UNIT: &str = "{work_item}";
/// Description of [`DOTNET_THREAD_POOL_QUEUE_LENGTH_NAME`].
pub const DOTNET_THREAD_POOL_QUEUE_LENGTH_DESCRIPTION: &str =
    "The number of work items that are currently queued to be processed by the thread pool.";

/// ## Description
///
/// The number of thread pool threads that currently exist.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`ThreadPool.ThreadCount`](https://learn.microsoft.com/dotnet/api/system.threading.threadpool.threadcount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{thread}` |
/// | Status: | `Stable` |
pub const DOTNET_THREAD_POOL_THREAD_COUNT_NAME: &str = "dotnet.thread_pool.thread.count";
/// Unit of [`DOTNET_THREAD_POOL_THREAD_COUNT_NAME`].
pub const DOTNET_THREAD_POOL_THREAD_COUNT_UNIT: &str = "{thread}";
/// Description of [`DOTNET_THREAD_POOL_THREAD_COUNT_NAME`].
pub const DOTNET_THREAD_POOL_THREAD_COUNT_DESCRIPTION: &str =
    "The number of thread pool threads that currently exist.";

/// ## Description
///
/// The number of work items that the thread pool has completed since the process has started.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`ThreadPool.CompletedWorkItemCount`](https://learn.microsoft.com/dotnet/api/system.threading.threadpool.completedworkitemcount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{work_item}` |
/// | Status: | `Stable` |
pub const DOTNET_THREAD_POOL_WORK_ITEM_COUNT_NAME: &str = "dotnet.thread_pool.work_item.count";
/// Unit of [`DOTNET_THREAD_POOL_WORK_ITEM_COUNT_NAME`].
pub const DOTNET_THREAD_POOL_WORK_ITEM_COUNT_UNIT: &str = "{work_item}";
/// Description of [`DOTNET_THREAD_POOL_WORK_ITEM_COUNT_NAME`].
pub const DOTNET_THREAD_POOL_WORK_ITEM_COUNT_DESCRIPTION: &str =
    "The number of work items that the thread pool has completed since the process has started.";

/// ## Description
///
/// The number of timer instances that are currently active.
///
/// ## Notes
///
/// Meter name: `System.Runtime`; Added in: .NET 9.0.
/// This metric reports the same values as calling [`Timer.ActiveCount`](https://learn.microsoft.com/dotnet/api/system.threading.timer.activecount)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{timer}` |
/// | Status: | `Stable` |
pub const DOTNET_TIMER_COUNT_NAME: &str = "dotnet.timer.count";
/// Unit of [`DOTNET_TIMER_COUNT_NAME`].
pub const DOTNET_TIMER_COUNT_UNIT: &str = "{timer}";
/// Description of [`DOTNET_TIMER_COUNT_NAME`].
pub const DOTNET_TIMER_COUNT_DESCRIPTION: &str =
    "The number of timer instances that are currently active.";

/// ## Description
///
/// Number of invocation cold starts
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{coldstart}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTARTS_NAME: &str = "faas.coldstarts";
/// Unit of [`FAAS_COLDSTARTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTARTS_UNIT: &str = "{coldstart}";
/// Description of [`FAAS_COLDSTARTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTARTS_DESCRIPTION: &str = "Number of invocation cold starts";

/// ## Description
///
/// Distribution of CPU usage per invocation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CPU_USAGE_NAME: &str = "faas.cpu_usage";
/// Unit of [`FAAS_CPU_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CPU_USAGE_UNIT: &str = "s";
/// Description of [`FAAS_CPU_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CPU_USAGE_DESCRIPTION: &str = "Distribution of CPU usage per invocation";

/// ## Description
///
/// Number of invocation errors
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{error}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_ERRORS_NAME: &str = "faas.errors";
/// Unit of [`FAAS_ERRORS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_ERRORS_UNIT: &str = "{error}";
/// Description of [`FAAS_ERRORS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_ERRORS_DESCRIPTION: &str = "Number of invocation errors";

/// ## Description
///
/// Measures the duration of the function's initialization, such as a cold start
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INIT_DURATION_NAME: &str = "faas.init_duration";
/// Unit of [`FAAS_INIT_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INIT_DURATION_UNIT: &str = "s";
/// Description of [`FAAS_INIT_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INIT_DURATION_DESCRIPTION: &str =
    "Measures the duration of the function's initialization, such as a cold start";

/// ## Description
///
/// Number of successful invocations
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{invocation}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATIONS_NAME: &str = "faas.invocations";
/// Unit of [`FAAS_INVOCATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATIONS_UNIT: &str = "{invocation}";
/// Description of [`FAAS_INVOCATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATIONS_DESCRIPTION: &str = "Number of successful invocations";

/// ## Description
///
/// Measures the duration of the function's logic execution
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKE_DURATION_NAME: &str = "faas.invoke_duration";
/// Unit of [`FAAS_INVOKE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKE_DURATION_UNIT: &str = "s";
/// Description of [`FAAS_INVOKE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKE_DURATION_DESCRIPTION: &str =
    "Measures the duration of the function's logic execution";

/// ## Description
///
/// Distribution of max memory usage per invocation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MEM_USAGE_NAME: &str = "faas.mem_usage";
/// Unit of [`FAAS_MEM_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MEM_USAGE_UNIT: &str = "By";
/// Description of [`FAAS_MEM_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MEM_USAGE_DESCRIPTION: &str = "Distribution of max memory usage per invocation";

/// ## Description
///
/// Distribution of net I/O usage per invocation
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NET_IO_NAME: &str = "faas.net_io";
/// Unit of [`FAAS_NET_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NET_IO_UNIT: &str = "By";
/// Description of [`FAAS_NET_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NET_IO_DESCRIPTION: &str = "Distribution of net I/O usage per invocation";

/// ## Description
///
/// Number of invocation timeouts
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{timeout}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIMEOUTS_NAME: &str = "faas.timeouts";
/// Unit of [`FAAS_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIMEOUTS_UNIT: &str = "{timeout}";
/// Description of [`FAAS_TIMEOUTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIMEOUTS_DESCRIPTION: &str = "Number of invocation timeouts";

/// ## Description
///
/// Heap size target percentage configured by the user, otherwise 100.
///
/// ## Notes
///
/// The value range is \\[0.0,100.0\\]. Computed from `/gc/gogc:percent`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `%` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_CONFIG_GOGC_NAME: &str = "go.config.gogc";
/// Unit of [`GO_CONFIG_GOGC_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_CONFIG_GOGC_UNIT: &str = "%";
/// Description of [`GO_CONFIG_GOGC_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_CONFIG_GOGC_DESCRIPTION: &str =
    "Heap size target percentage configured by the user, otherwise 100.";

/// ## Description
///
/// Count of live goroutines.
///
/// ## Notes
///
/// Computed from `/sched/goroutines:goroutines`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{goroutine}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_GOROUTINE_COUNT_NAME: &str = "go.goroutine.count";
/// Unit of [`GO_GOROUTINE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_GOROUTINE_COUNT_UNIT: &str = "{goroutine}";
/// Description of [`GO_GOROUTINE_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_GOROUTINE_COUNT_DESCRIPTION: &str = "Count of live goroutines.";

/// ## Description
///
/// Memory allocated to the heap by the application.
///
/// ## Notes
///
/// Computed from `/gc/heap/allocs:bytes`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATED_NAME: &str = "go.memory.allocated";
/// Unit of [`GO_MEMORY_ALLOCATED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATED_UNIT: &str = "By";
/// Description of [`GO_MEMORY_ALLOCATED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATED_DESCRIPTION: &str =
    "Memory allocated to the heap by the application.";

/// ## Description
///
/// Count of allocations to the heap by the application.
///
/// ## Notes
///
/// Computed from `/gc/heap/allocs:objects`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{allocation}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATIONS_NAME: &str = "go.memory.allocations";
/// Unit of [`GO_MEMORY_ALLOCATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATIONS_UNIT: &str = "{allocation}";
/// Description of [`GO_MEMORY_ALLOCATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATIONS_DESCRIPTION: &str =
    "Count of allocations to the heap by the application.";

/// ## Description
///
/// Heap size target for the end of the GC cycle.
///
/// ## Notes
///
/// Computed from `/gc/heap/goal:bytes`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_GC_GOAL_NAME: &str = "go.memory.gc.goal";
/// Unit of [`GO_MEMORY_GC_GOAL_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_GC_GOAL_UNIT: &str = "By";
/// Description of [`GO_MEMORY_GC_GOAL_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_GC_GOAL_DESCRIPTION: &str = "Heap size target for the end of the GC cycle.";

/// ## Description
///
/// Go runtime memory limit configured by the user, if a limit exists.
///
/// ## Notes
///
/// Computed from `/gc/gomemlimit:bytes`. This metric is excluded if the limit obtained from the Go runtime is math.MaxInt64
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_LIMIT_NAME: &str = "go.memory.limit";
/// Unit of [`GO_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_LIMIT_UNIT: &str = "By";
/// Description of [`GO_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_LIMIT_DESCRIPTION: &str =
    "Go runtime memory limit configured by the user, if a limit exists.";

/// ## Description
///
/// Memory used by the Go runtime.
///
/// ## Notes
///
/// Computed from `(/memory/classes/total:bytes - /memory/classes/heap/released:bytes)`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_USED_NAME: &str = "go.memory.used";
/// Unit of [`GO_MEMORY_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_USED_UNIT: &str = "By";
/// Description of [`GO_MEMORY_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_USED_DESCRIPTION: &str = "Memory used by the Go runtime.";

/// ## Description
///
/// The number of OS threads that can execute user-level Go code simultaneously.
///
/// ## Notes
///
/// Computed from `/sched/gomaxprocs:threads`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{thread}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_PROCESSOR_LIMIT_NAME: &str = "go.processor.limit";
/// Unit of [`GO_PROCESSOR_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_PROCESSOR_LIMIT_UNIT: &str = "{thread}";
/// Description of [`GO_PROCESSOR_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_PROCESSOR_LIMIT_DESCRIPTION: &str =
    "The number of OS threads that can execute user-level Go code simultaneously.";

/// ## Description
///
/// The time goroutines have spent in the scheduler in a runnable state before actually running.
///
/// ## Notes
///
/// Computed from `/sched/latencies:seconds`. Bucket boundaries are provided by the runtime, and are subject to change
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const GO_SCHEDULE_DURATION_NAME: &str = "go.schedule.duration";
/// Unit of [`GO_SCHEDULE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_SCHEDULE_DURATION_UNIT: &str = "s";
/// Description of [`GO_SCHEDULE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const GO_SCHEDULE_DURATION_DESCRIPTION: &str =
    "The time goroutines have spent in the scheduler in a runnable state before actually running.";

/// ## Description
///
/// Number of active HTTP requests
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_ACTIVE_REQUESTS_NAME: &str = "http.client.active_requests";
/// Unit of [`HTTP_CLIENT_ACTIVE_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_ACTIVE_REQUESTS_UNIT: &str = "{request}";
/// Description of [`HTTP_CLIENT_ACTIVE_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_ACTIVE_REQUESTS_DESCRIPTION: &str = "Number of active HTTP requests";

/// ## Description
///
/// The duration of the successfully established outbound HTTP connections
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_CONNECTION_DURATION_NAME: &str = "http.client.connection.duration";
/// Unit of [`HTTP_CLIENT_CONNECTION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_CONNECTION_DURATION_UNIT: &str = "s";
/// Description of [`HTTP_CLIENT_CONNECTION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_CONNECTION_DURATION_DESCRIPTION: &str =
    "The duration of the successfully established outbound HTTP connections";

/// ## Description
///
/// Number of outbound HTTP connections that are currently active or idle on the client
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_OPEN_CONNECTIONS_NAME: &str = "http.client.open_connections";
/// Unit of [`HTTP_CLIENT_OPEN_CONNECTIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_OPEN_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`HTTP_CLIENT_OPEN_CONNECTIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_OPEN_CONNECTIONS_DESCRIPTION: &str =
    "Number of outbound HTTP connections that are currently active or idle on the client";

/// ## Description
///
/// Size of HTTP client request bodies.
///
/// ## Notes
///
/// The size of the request payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_REQUEST_BODY_SIZE_NAME: &str = "http.client.request.body.size";
/// Unit of [`HTTP_CLIENT_REQUEST_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_REQUEST_BODY_SIZE_UNIT: &str = "By";
/// Description of [`HTTP_CLIENT_REQUEST_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_REQUEST_BODY_SIZE_DESCRIPTION: &str = "Size of HTTP client request bodies.";

/// ## Description
///
/// Duration of HTTP client requests
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const HTTP_CLIENT_REQUEST_DURATION_NAME: &str = "http.client.request.duration";
/// Unit of [`HTTP_CLIENT_REQUEST_DURATION_NAME`].
pub const HTTP_CLIENT_REQUEST_DURATION_UNIT: &str = "s";
/// Description of [`HTTP_CLIENT_REQUEST_DURATION_NAME`].
pub const HTTP_CLIENT_REQUEST_DURATION_DESCRIPTION: &str = "Duration of HTTP client requests";

/// ## Description
///
/// Size of HTTP client response bodies.
///
/// ## Notes
///
/// The size of the response payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_RESPONSE_BODY_SIZE_NAME: &str = "http.client.response.body.size";
/// Unit of [`HTTP_CLIENT_RESPONSE_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_RESPONSE_BODY_SIZE_UNIT: &str = "By";
/// Description of [`HTTP_CLIENT_RESPONSE_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_RESPONSE_BODY_SIZE_DESCRIPTION: &str = "Size of HTTP client response bodies.";

/// ## Description
///
/// Number of active HTTP server requests
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_ACTIVE_REQUESTS_NAME: &str = "http.server.active_requests";
/// Unit of [`HTTP_SERVER_ACTIVE_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_ACTIVE_REQUESTS_UNIT: &str = "{request}";
/// Description of [`HTTP_SERVER_ACTIVE_REQUESTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_ACTIVE_REQUESTS_DESCRIPTION: &str = "Number of active HTTP server requests";

/// ## Description
///
/// Size of HTTP server request bodies.
///
/// ## Notes
///
/// The size of the request payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_REQUEST_BODY_SIZE_NAME: &str = "http.server.request.body.size";
/// Unit of [`HTTP_SERVER_REQUEST_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_REQUEST_BODY_SIZE_UNIT: &str = "By";
/// Description of [`HTTP_SERVER_REQUEST_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_REQUEST_BODY_SIZE_DESCRIPTION: &str = "Size of HTTP server request bodies.";

/// ## Description
///
/// Duration of HTTP server requests.
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const HTTP_SERVER_REQUEST_DURATION_NAME: &str = "http.server.request.duration";
/// Unit of [`HTTP_SERVER_REQUEST_DURATION_NAME`].
pub const HTTP_SERVER_REQUEST_DURATION_UNIT: &str = "s";
/// Description of [`HTTP_SERVER_REQUEST_DURATION_NAME`].
pub const HTTP_SERVER_REQUEST_DURATION_DESCRIPTION: &str = "Duration of HTTP server requests.";

/// ## Description
///
/// Size of HTTP server response bodies.
///
/// ## Notes
///
/// The size of the response payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_RESPONSE_BODY_SIZE_NAME: &str = "http.server.response.body.size";
/// Unit of [`HTTP_SERVER_RESPONSE_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_RESPONSE_BODY_SIZE_UNIT: &str = "By";
/// Description of [`HTTP_SERVER_RESPONSE_BODY_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_RESPONSE_BODY_SIZE_DESCRIPTION: &str = "Size of HTTP server response bodies.";

/// ## Description
///
/// Number of buffers in the pool
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{buffer}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_COUNT_NAME: &str = "jvm.buffer.count";
/// Unit of [`JVM_BUFFER_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_COUNT_UNIT: &str = "{buffer}";
/// Description of [`JVM_BUFFER_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_COUNT_DESCRIPTION: &str = "Number of buffers in the pool";

/// ## Description
///
/// Measure of total memory capacity of buffers
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_LIMIT_NAME: &str = "jvm.buffer.memory.limit";
/// Unit of [`JVM_BUFFER_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_LIMIT_UNIT: &str = "By";
/// Description of [`JVM_BUFFER_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_LIMIT_DESCRIPTION: &str = "Measure of total memory capacity of buffers";

/// ## Description
///
/// Deprecated, use `jvm.buffer.memory.used` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `jvm.buffer.memory.used`.")]
pub const JVM_BUFFER_MEMORY_USAGE_NAME: &str = "jvm.buffer.memory.usage";
/// Unit of [`JVM_BUFFER_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `jvm.buffer.memory.used`.")]
pub const JVM_BUFFER_MEMORY_USAGE_UNIT: &str = "By";
/// Description of [`JVM_BUFFER_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `jvm.buffer.memory.used`.")]
pub const JVM_BUFFER_MEMORY_USAGE_DESCRIPTION: &str =
    "Deprecated, use `jvm.buffer.memory.used` instead";

/// ## Description
///
/// Measure of memory used by buffers
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_USED_NAME: &str = "jvm.buffer.memory.used";
/// Unit of [`JVM_BUFFER_MEMORY_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_USED_UNIT: &str = "By";
/// Description of [`JVM_BUFFER_MEMORY_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_USED_DESCRIPTION: &str = "Measure of memory used by buffers";

/// ## Description
///
/// Number of classes currently loaded
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{class}` |
/// | Status: | `Stable` |
pub const JVM_CLASS_COUNT_NAME: &str = "jvm.class.count";
/// Unit of [`JVM_CLASS_COUNT_NAME`].
pub const JVM_CLASS_COUNT_UNIT: &str = "{class}";
/// Description of [`JVM_CLASS_COUNT_NAME`].
pub const JVM_CLASS_COUNT_DESCRIPTION: &str = "Number of classes currently loaded";

/// ## Description
///
/// Number of classes loaded since JVM start
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{class}` |
/// | Status: | `Stable` |
pub const JVM_CLASS_LOADED_NAME: &str = "jvm.class.loaded";
/// Unit of [`JVM_CLASS_LOADED_NAME`].
pub const JVM_CLASS_LOADED_UNIT: &str = "{class}";
/// Description of [`JVM_CLASS_LOADED_NAME`].
pub const JVM_CLASS_LOADED_DESCRIPTION: &str = "Number of classes loaded since JVM start";

/// ## Description
///
/// Number of classes unloaded since JVM start
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{class}` |
/// | Status: | `Stable` |
pub const JVM_CLASS_UNLOADED_NAME: &str = "jvm.class.unloaded";
/// Unit of [`JVM_CLASS_UNLOADED_NAME`].
pub const JVM_CLASS_UNLOADED_UNIT: &str = "{class}";
/// Description of [`JVM_CLASS_UNLOADED_NAME`].
pub const JVM_CLASS_UNLOADED_DESCRIPTION: &str = "Number of classes unloaded since JVM start";

/// ## Description
///
/// Number of processors available to the Java virtual machine
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{cpu}` |
/// | Status: | `Stable` |
pub const JVM_CPU_COUNT_NAME: &str = "jvm.cpu.count";
/// Unit of [`JVM_CPU_COUNT_NAME`].
pub const JVM_CPU_COUNT_UNIT: &str = "{cpu}";
/// Description of [`JVM_CPU_COUNT_NAME`].
pub const JVM_CPU_COUNT_DESCRIPTION: &str =
    "Number of processors available to the Java virtual machine";

/// ## Description
///
/// Recent CPU utilization for the process as reported by the JVM.
///
/// ## Notes
///
/// The value range is \\[0.0,1.0\\]. This utilization is not defined as being for the specific interval since last measurement (unlike `system.cpu.utilization`). [Reference](https://docs.oracle.com/en/java/javase/17/docs/api/jdk.management/com/sun/management/OperatingSystemMXBean.html#getProcessCpuLoad())
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Stable` |
pub const JVM_CPU_RECENT_UTILIZATION_NAME: &str = "jvm.cpu.recent_utilization";
/// Unit of [`JVM_CPU_RECENT_UTILIZATION_NAME`].
pub const JVM_CPU_RECENT_UTILIZATION_UNIT: &str = "1";
/// Description of [`JVM_CPU_RECENT_UTILIZATION_NAME`].
pub const JVM_CPU_RECENT_UTILIZATION_DESCRIPTION: &str =
    "Recent CPU utilization for the process as reported by the JVM.";

/// ## Description
///
/// CPU time used by the process as reported by the JVM
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const JVM_CPU_TIME_NAME: &str = "jvm.cpu.time";
/// Unit of [`JVM_CPU_TIME_NAME`].
pub const JVM_CPU_TIME_UNIT: &str = "s";
/// Description of [`JVM_CPU_TIME_NAME`].
pub const JVM_CPU_TIME_DESCRIPTION: &str = "CPU time used by the process as reported by the JVM";

/// ## Description
///
/// Duration of JVM garbage collection actions
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const JVM_GC_DURATION_NAME: &str = "jvm.gc.duration";
/// Unit of [`JVM_GC_DURATION_NAME`].
pub const JVM_GC_DURATION_UNIT: &str = "s";
/// Description of [`JVM_GC_DURATION_NAME`].
pub const JVM_GC_DURATION_DESCRIPTION: &str = "Duration of JVM garbage collection actions";

/// ## Description
///
/// Measure of memory committed
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const JVM_MEMORY_COMMITTED_NAME: &str = "jvm.memory.committed";
/// Unit of [`JVM_MEMORY_COMMITTED_NAME`].
pub const JVM_MEMORY_COMMITTED_UNIT: &str = "By";
/// Description of [`JVM_MEMORY_COMMITTED_NAME`].
pub const JVM_MEMORY_COMMITTED_DESCRIPTION: &str = "Measure of memory committed";

/// ## Description
///
/// Measure of initial memory requested
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_MEMORY_INIT_NAME: &str = "jvm.memory.init";
/// Unit of [`JVM_MEMORY_INIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_MEMORY_INIT_UNIT: &str = "By";
/// Description of [`JVM_MEMORY_INIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_MEMORY_INIT_DESCRIPTION: &str = "Measure of initial memory requested";

/// ## Description
///
/// Measure of max obtainable memory
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const JVM_MEMORY_LIMIT_NAME: &str = "jvm.memory.limit";
/// Unit of [`JVM_MEMORY_LIMIT_NAME`].
pub const JVM_MEMORY_LIMIT_UNIT: &str = "By";
/// Description of [`JVM_MEMORY_LIMIT_NAME`].
pub const JVM_MEMORY_LIMIT_DESCRIPTION: &str = "Measure of max obtainable memory";

/// ## Description
///
/// Measure of memory used
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const JVM_MEMORY_USED_NAME: &str = "jvm.memory.used";
/// Unit of [`JVM_MEMORY_USED_NAME`].
pub const JVM_MEMORY_USED_UNIT: &str = "By";
/// Description of [`JVM_MEMORY_USED_NAME`].
pub const JVM_MEMORY_USED_DESCRIPTION: &str = "Measure of memory used";

/// ## Description
///
/// Measure of memory used, as measured after the most recent garbage collection event on this pool
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Stable` |
pub const JVM_MEMORY_USED_AFTER_LAST_GC_NAME: &str = "jvm.memory.used_after_last_gc";
/// Unit of [`JVM_MEMORY_USED_AFTER_LAST_GC_NAME`].
pub const JVM_MEMORY_USED_AFTER_LAST_GC_UNIT: &str = "By";
/// Description of [`JVM_MEMORY_USED_AFTER_LAST_GC_NAME`].
pub const JVM_MEMORY_USED_AFTER_LAST_GC_DESCRIPTION: &str =
    "Measure of memory used, as measured after the most recent garbage collection event on this pool";

/// ## Description
///
/// Average CPU load of the whole system for the last minute as reported by the JVM.
///
/// ## Notes
///
/// The value range is \\[0,n\\], where n is the number of CPU cores - or a negative number if the value is not available. This utilization is not defined as being for the specific interval since last measurement (unlike `system.cpu.utilization`). [Reference](https://docs.oracle.com/en/java/javase/17/docs/api/java.management/java/lang/management/OperatingSystemMXBean.html#getSystemLoadAverage())
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `{run_queue_item}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_LOAD_1M_NAME: &str = "jvm.system.cpu.load_1m";
/// Unit of [`JVM_SYSTEM_CPU_LOAD_1M_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_LOAD_1M_UNIT: &str = "{run_queue_item}";
/// Description of [`JVM_SYSTEM_CPU_LOAD_1M_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_LOAD_1M_DESCRIPTION: &str =
    "Average CPU load of the whole system for the last minute as reported by the JVM.";

/// ## Description
///
/// Recent CPU utilization for the whole system as reported by the JVM.
///
/// ## Notes
///
/// The value range is \\[0.0,1.0\\]. This utilization is not defined as being for the specific interval since last measurement (unlike `system.cpu.utilization`). [Reference](https://docs.oracle.com/en/java/javase/17/docs/api/jdk.management/com/sun/management/OperatingSystemMXBean.html#getCpuLoad())
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_UTILIZATION_NAME: &str = "jvm.system.cpu.utilization";
/// Unit of [`JVM_SYSTEM_CPU_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_UTILIZATION_UNIT: &str = "1";
/// Description of [`JVM_SYSTEM_CPU_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_UTILIZATION_DESCRIPTION: &str =
    "Recent CPU utilization for the whole system as reported by the JVM.";

/// ## Description
///
/// Number of executing platform threads
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{thread}` |
/// | Status: | `Stable` |
pub const JVM_THREAD_COUNT_NAME: &str = "jvm.thread.count";
/// Unit of [`JVM_THREAD_COUNT_NAME`].
pub const JVM_THREAD_COUNT_UNIT: &str = "{thread}";
/// Description of [`JVM_THREAD_COUNT_NAME`].
pub const JVM_THREAD_COUNT_DESCRIPTION: &str = "Number of executing platform threads";

/// ## Description
///
/// Number of connections that are currently active on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Stable` |
pub const KESTREL_ACTIVE_CONNECTIONS_NAME: &str = "kestrel.active_connections";
/// Unit of [`KESTREL_ACTIVE_CONNECTIONS_NAME`].
pub const KESTREL_ACTIVE_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`KESTREL_ACTIVE_CONNECTIONS_NAME`].
pub const KESTREL_ACTIVE_CONNECTIONS_DESCRIPTION: &str =
    "Number of connections that are currently active on the server.";

/// ## Description
///
/// Number of TLS handshakes that are currently in progress on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{handshake}` |
/// | Status: | `Stable` |
pub const KESTREL_ACTIVE_TLS_HANDSHAKES_NAME: &str = "kestrel.active_tls_handshakes";
/// Unit of [`KESTREL_ACTIVE_TLS_HANDSHAKES_NAME`].
pub const KESTREL_ACTIVE_TLS_HANDSHAKES_UNIT: &str = "{handshake}";
/// Description of [`KESTREL_ACTIVE_TLS_HANDSHAKES_NAME`].
pub const KESTREL_ACTIVE_TLS_HANDSHAKES_DESCRIPTION: &str =
    "Number of TLS handshakes that are currently in progress on the server.";

/// ## Description
///
/// The duration of connections on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const KESTREL_CONNECTION_DURATION_NAME: &str = "kestrel.connection.duration";
/// Unit of [`KESTREL_CONNECTION_DURATION_NAME`].
pub const KESTREL_CONNECTION_DURATION_UNIT: &str = "s";
/// Description of [`KESTREL_CONNECTION_DURATION_NAME`].
pub const KESTREL_CONNECTION_DURATION_DESCRIPTION: &str =
    "The duration of connections on the server.";

/// ## Description
///
/// Number of connections that are currently queued and are waiting to start.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Stable` |
pub const KESTREL_QUEUED_CONNECTIONS_NAME: &str = "kestrel.queued_connections";
/// Unit of [`KESTREL_QUEUED_CONNECTIONS_NAME`].
pub const KESTREL_QUEUED_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`KESTREL_QUEUED_CONNECTIONS_NAME`].
pub const KESTREL_QUEUED_CONNECTIONS_DESCRIPTION: &str =
    "Number of connections that are currently queued and are waiting to start.";

/// ## Description
///
/// Number of HTTP requests on multiplexed connections (HTTP/2 and HTTP/3) that are currently queued and are waiting to start.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{request}` |
/// | Status: | `Stable` |
pub const KESTREL_QUEUED_REQUESTS_NAME: &str = "kestrel.queued_requests";
/// Unit of [`KESTREL_QUEUED_REQUESTS_NAME`].
pub const KESTREL_QUEUED_REQUESTS_UNIT: &str = "{request}";
/// Description of [`KESTREL_QUEUED_REQUESTS_NAME`].
pub const KESTREL_QUEUED_REQUESTS_DESCRIPTION: &str =
    "Number of HTTP requests on multiplexed connections (HTTP/2 and HTTP/3) that are currently queued and are waiting to start.";

/// ## Description
///
/// Number of connections rejected by the server.
///
/// ## Notes
///
/// Connections are rejected when the currently active count exceeds the value configured with `MaxConcurrentConnections`.
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{connection}` |
/// | Status: | `Stable` |
pub const KESTREL_REJECTED_CONNECTIONS_NAME: &str = "kestrel.rejected_connections";
/// Unit of [`KESTREL_REJECTED_CONNECTIONS_NAME`].
pub const KESTREL_REJECTED_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`KESTREL_REJECTED_CONNECTIONS_NAME`].
pub const KESTREL_REJECTED_CONNECTIONS_DESCRIPTION: &str =
    "Number of connections rejected by the server.";

/// ## Description
///
/// The duration of TLS handshakes on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const KESTREL_TLS_HANDSHAKE_DURATION_NAME: &str = "kestrel.tls_handshake.duration";
/// Unit of [`KESTREL_TLS_HANDSHAKE_DURATION_NAME`].
pub const KESTREL_TLS_HANDSHAKE_DURATION_UNIT: &str = "s";
/// Description of [`KESTREL_TLS_HANDSHAKE_DURATION_NAME`].
pub const KESTREL_TLS_HANDSHAKE_DURATION_DESCRIPTION: &str =
    "The duration of TLS handshakes on the server.";

/// ## Description
///
/// Number of connections that are currently upgraded (WebSockets). .
///
/// ## Notes
///
/// The counter only tracks HTTP/1.1 connections.
///
/// Meter name: `Microsoft.AspNetCore.Server.Kestrel`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Stable` |
pub const KESTREL_UPGRADED_CONNECTIONS_NAME: &str = "kestrel.upgraded_connections";
/// Unit of [`KESTREL_UPGRADED_CONNECTIONS_NAME`].
pub const KESTREL_UPGRADED_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`KESTREL_UPGRADED_CONNECTIONS_NAME`].
pub const KESTREL_UPGRADED_CONNECTIONS_DESCRIPTION: &str =
    "Number of connections that are currently upgraded (WebSockets). .";

/// ## Description
///
/// Number of messages that were delivered to the application.
///
/// ## Notes
///
/// Records the number of messages pulled from the broker or number of messages dispatched to the application in push-based scenarios.
/// The metric SHOULD be reported once per message delivery. For example, if receiving and processing operations are both instrumented for a single message delivery, this counter is incremented when the message is received and not reported when it is processed
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_CONSUMED_MESSAGES_NAME: &str = "messaging.client.consumed.messages";
/// Unit of [`MESSAGING_CLIENT_CONSUMED_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_CONSUMED_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_CLIENT_CONSUMED_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_CONSUMED_MESSAGES_DESCRIPTION: &str =
    "Number of messages that were delivered to the application.";

/// ## Description
///
/// Duration of messaging operation initiated by a producer or consumer client.
///
/// ## Notes
///
/// This metric SHOULD NOT be used to report processing duration - processing duration is reported in `messaging.process.duration` metric
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_OPERATION_DURATION_NAME: &str = "messaging.client.operation.duration";
/// Unit of [`MESSAGING_CLIENT_OPERATION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_OPERATION_DURATION_UNIT: &str = "s";
/// Description of [`MESSAGING_CLIENT_OPERATION_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_OPERATION_DURATION_DESCRIPTION: &str =
    "Duration of messaging operation initiated by a producer or consumer client.";

/// ## Description
///
/// Deprecated. Use `messaging.client.sent.messages` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.sent.messages`.")]
pub const MESSAGING_CLIENT_PUBLISHED_MESSAGES_NAME: &str = "messaging.client.published.messages";
/// Unit of [`MESSAGING_CLIENT_PUBLISHED_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.sent.messages`.")]
pub const MESSAGING_CLIENT_PUBLISHED_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_CLIENT_PUBLISHED_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.sent.messages`.")]
pub const MESSAGING_CLIENT_PUBLISHED_MESSAGES_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.sent.messages` instead";

/// ## Description
///
/// Number of messages producer attempted to send to the broker.
///
/// ## Notes
///
/// This metric MUST NOT count messages that were created but haven't yet been sent
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_SENT_MESSAGES_NAME: &str = "messaging.client.sent.messages";
/// Unit of [`MESSAGING_CLIENT_SENT_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_SENT_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_CLIENT_SENT_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_SENT_MESSAGES_DESCRIPTION: &str =
    "Number of messages producer attempted to send to the broker.";

/// ## Description
///
/// Duration of processing operation.
///
/// ## Notes
///
/// This metric MUST be reported for operations with `messaging.operation.type` that matches `process`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_PROCESS_DURATION_NAME: &str = "messaging.process.duration";
/// Unit of [`MESSAGING_PROCESS_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_PROCESS_DURATION_UNIT: &str = "s";
/// Description of [`MESSAGING_PROCESS_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_PROCESS_DURATION_DESCRIPTION: &str = "Duration of processing operation.";

/// ## Description
///
/// Deprecated. Use `messaging.client.consumed.messages` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_PROCESS_MESSAGES_NAME: &str = "messaging.process.messages";
/// Unit of [`MESSAGING_PROCESS_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_PROCESS_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_PROCESS_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_PROCESS_MESSAGES_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.consumed.messages` instead";

/// ## Description
///
/// Deprecated. Use `messaging.client.operation.duration` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_PUBLISH_DURATION_NAME: &str = "messaging.publish.duration";
/// Unit of [`MESSAGING_PUBLISH_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_PUBLISH_DURATION_UNIT: &str = "s";
/// Description of [`MESSAGING_PUBLISH_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_PUBLISH_DURATION_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.operation.duration` instead";

/// ## Description
///
/// Deprecated. Use `messaging.client.produced.messages` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.produced.messages`.")]
pub const MESSAGING_PUBLISH_MESSAGES_NAME: &str = "messaging.publish.messages";
/// Unit of [`MESSAGING_PUBLISH_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.produced.messages`.")]
pub const MESSAGING_PUBLISH_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_PUBLISH_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.produced.messages`.")]
pub const MESSAGING_PUBLISH_MESSAGES_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.produced.messages` instead";

/// ## Description
///
/// Deprecated. Use `messaging.client.operation.duration` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_RECEIVE_DURATION_NAME: &str = "messaging.receive.duration";
/// Unit of [`MESSAGING_RECEIVE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_RECEIVE_DURATION_UNIT: &str = "s";
/// Description of [`MESSAGING_RECEIVE_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_RECEIVE_DURATION_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.operation.duration` instead";

/// ## Description
///
/// Deprecated. Use `messaging.client.consumed.messages` instead
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{message}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_RECEIVE_MESSAGES_NAME: &str = "messaging.receive.messages";
/// Unit of [`MESSAGING_RECEIVE_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_RECEIVE_MESSAGES_UNIT: &str = "{message}";
/// Description of [`MESSAGING_RECEIVE_MESSAGES_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_RECEIVE_MESSAGES_DESCRIPTION: &str =
    "Deprecated. Use `messaging.client.consumed.messages` instead";

/// ## Description
///
/// Event loop maximum delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.max` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MAX_NAME: &str = "nodejs.eventloop.delay.max";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MAX_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_MAX_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MAX_DESCRIPTION: &str = "Event loop maximum delay.";

/// ## Description
///
/// Event loop mean delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.mean` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MEAN_NAME: &str = "nodejs.eventloop.delay.mean";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_MEAN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MEAN_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_MEAN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MEAN_DESCRIPTION: &str = "Event loop mean delay.";

/// ## Description
///
/// Event loop minimum delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.min` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MIN_NAME: &str = "nodejs.eventloop.delay.min";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MIN_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_MIN_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MIN_DESCRIPTION: &str = "Event loop minimum delay.";

/// ## Description
///
/// Event loop 50 percentile delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.percentile(50)` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P50_NAME: &str = "nodejs.eventloop.delay.p50";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_P50_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P50_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_P50_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P50_DESCRIPTION: &str = "Event loop 50 percentile delay.";

/// ## Description
///
/// Event loop 90 percentile delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.percentile(90)` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P90_NAME: &str = "nodejs.eventloop.delay.p90";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_P90_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P90_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_P90_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P90_DESCRIPTION: &str = "Event loop 90 percentile delay.";

/// ## Description
///
/// Event loop 99 percentile delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.percentile(99)` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P99_NAME: &str = "nodejs.eventloop.delay.p99";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_P99_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P99_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_P99_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P99_DESCRIPTION: &str = "Event loop 99 percentile delay.";

/// ## Description
///
/// Event loop standard deviation delay.
///
/// ## Notes
///
/// Value can be retrieved from value `histogram.stddev` of [`perf_hooks.monitorEventLoopDelay([options])`](https://nodejs.org/api/perf_hooks.html#perf_hooksmonitoreventloopdelayoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_STDDEV_NAME: &str = "nodejs.eventloop.delay.stddev";
/// Unit of [`NODEJS_EVENTLOOP_DELAY_STDDEV_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_STDDEV_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_DELAY_STDDEV_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_STDDEV_DESCRIPTION: &str = "Event loop standard deviation delay.";

/// ## Description
///
/// Cumulative duration of time the event loop has been in each state.
///
/// ## Notes
///
/// Value can be retrieved from [`performance.eventLoopUtilization([utilization1[, utilization2]])`](https://nodejs.org/api/perf_hooks.html#performanceeventlooputilizationutilization1-utilization2)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_TIME_NAME: &str = "nodejs.eventloop.time";
/// Unit of [`NODEJS_EVENTLOOP_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_TIME_UNIT: &str = "s";
/// Description of [`NODEJS_EVENTLOOP_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_TIME_DESCRIPTION: &str =
    "Cumulative duration of time the event loop has been in each state.";

/// ## Description
///
/// Event loop utilization.
///
/// ## Notes
///
/// The value range is \[0.0, 1.0\] and can be retrieved from [`performance.eventLoopUtilization([utilization1[, utilization2]])`](https://nodejs.org/api/perf_hooks.html#performanceeventlooputilizationutilization1-utilization2)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_UTILIZATION_NAME: &str = "nodejs.eventloop.utilization";
/// Unit of [`NODEJS_EVENTLOOP_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_UTILIZATION_UNIT: &str = "1";
/// Description of [`NODEJS_EVENTLOOP_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_UTILIZATION_DESCRIPTION: &str = "Event loop utilization.";

/// ## Description
///
/// Number of connections that are currently active on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Http.Connections`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Stable` |
pub const SIGNALR_SERVER_ACTIVE_CONNECTIONS_NAME: &str = "signalr.server.active_connections";
/// Unit of [`SIGNALR_SERVER_ACTIVE_CONNECTIONS_NAME`].
pub const SIGNALR_SERVER_ACTIVE_CONNECTIONS_UNIT: &str = "{connection}";
/// Description of [`SIGNALR_SERVER_ACTIVE_CONNECTIONS_NAME`].
pub const SIGNALR_SERVER_ACTIVE_CONNECTIONS_DESCRIPTION: &str =
    "Number of connections that are currently active on the server.";

/// ## Description
///
/// The duration of connections on the server.
///
/// ## Notes
///
/// Meter name: `Microsoft.AspNetCore.Http.Connections`; Added in: ASP.NET Core 8.0
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const SIGNALR_SERVER_CONNECTION_DURATION_NAME: &str = "signalr.server.connection.duration";
/// Unit of [`SIGNALR_SERVER_CONNECTION_DURATION_NAME`].
pub const SIGNALR_SERVER_CONNECTION_DURATION_UNIT: &str = "s";
/// Description of [`SIGNALR_SERVER_CONNECTION_DURATION_NAME`].
pub const SIGNALR_SERVER_CONNECTION_DURATION_DESCRIPTION: &str =
    "The duration of connections on the server.";

/// ## Description
///
/// Reports the current frequency of the CPU in Hz
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `{Hz}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_FREQUENCY_NAME: &str = "system.cpu.frequency";
/// Unit of [`SYSTEM_CPU_FREQUENCY_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_FREQUENCY_UNIT: &str = "{Hz}";
/// Description of [`SYSTEM_CPU_FREQUENCY_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_FREQUENCY_DESCRIPTION: &str = "Reports the current frequency of the CPU in Hz";

/// ## Description
///
/// Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking
///
/// ## Notes
///
/// Calculated by multiplying the number of sockets by the number of cores per socket, and then by the number of threads per core
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{cpu}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_LOGICAL_COUNT_NAME: &str = "system.cpu.logical.count";
/// Unit of [`SYSTEM_CPU_LOGICAL_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_LOGICAL_COUNT_UNIT: &str = "{cpu}";
/// Description of [`SYSTEM_CPU_LOGICAL_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_LOGICAL_COUNT_DESCRIPTION: &str =
    "Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking";

/// ## Description
///
/// Reports the number of actual physical processor cores on the hardware
///
/// ## Notes
///
/// Calculated by multiplying the number of sockets by the number of cores per socket
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{cpu}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_PHYSICAL_COUNT_NAME: &str = "system.cpu.physical.count";
/// Unit of [`SYSTEM_CPU_PHYSICAL_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_PHYSICAL_COUNT_UNIT: &str = "{cpu}";
/// Description of [`SYSTEM_CPU_PHYSICAL_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_PHYSICAL_COUNT_DESCRIPTION: &str =
    "Reports the number of actual physical processor cores on the hardware";

/// ## Description
///
/// Seconds each logical CPU spent on each mode
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_TIME_NAME: &str = "system.cpu.time";
/// Unit of [`SYSTEM_CPU_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_TIME_UNIT: &str = "s";
/// Description of [`SYSTEM_CPU_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_TIME_DESCRIPTION: &str = "Seconds each logical CPU spent on each mode";

/// ## Description
///
/// Difference in system.cpu.time since the last measurement, divided by the elapsed time and number of logical CPUs
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_UTILIZATION_NAME: &str = "system.cpu.utilization";
/// Unit of [`SYSTEM_CPU_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_UTILIZATION_UNIT: &str = "1";
/// Description of [`SYSTEM_CPU_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_UTILIZATION_DESCRIPTION: &str =
    "Difference in system.cpu.time since the last measurement, divided by the elapsed time and number of logical CPUs";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_NAME: &str = "system.disk.io";
/// Unit of [`SYSTEM_DISK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_UNIT: &str = "By";

/// ## Description
///
/// Time disk spent activated
///
/// ## Notes
///
/// The real elapsed time ("wall clock") used in the I/O path (time from operations running in parallel are not counted). Measured as:
///
/// - Linux: Field 13 from [procfs-diskstats](https://www.kernel.org/doc/Documentation/ABI/testing/procfs-diskstats)
/// - Windows: The complement of
///   ["Disk% Idle Time"](https://learn.microsoft.com/archive/blogs/askcore/windows-performance-monitor-disk-counters-explained#windows-performance-monitor-disk-counters-explained)
///   performance counter: `uptime * (100 - "Disk\% Idle Time") / 100`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_TIME_NAME: &str = "system.disk.io_time";
/// Unit of [`SYSTEM_DISK_IO_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_TIME_UNIT: &str = "s";
/// Description of [`SYSTEM_DISK_IO_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_TIME_DESCRIPTION: &str = "Time disk spent activated";

/// ## Description
///
/// The total storage capacity of the disk
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_LIMIT_NAME: &str = "system.disk.limit";
/// Unit of [`SYSTEM_DISK_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_LIMIT_UNIT: &str = "By";
/// Description of [`SYSTEM_DISK_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_LIMIT_DESCRIPTION: &str = "The total storage capacity of the disk";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{operation}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_MERGED_NAME: &str = "system.disk.merged";
/// Unit of [`SYSTEM_DISK_MERGED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_MERGED_UNIT: &str = "{operation}";

/// ## Description
///
/// Sum of the time each operation took to complete
///
/// ## Notes
///
/// Because it is the sum of time each request took, parallel-issued requests each contribute to make the count grow. Measured as:
///
/// - Linux: Fields 7 & 11 from [procfs-diskstats](https://www.kernel.org/doc/Documentation/ABI/testing/procfs-diskstats)
/// - Windows: "Avg. Disk sec/Read" perf counter multiplied by "Disk Reads/sec" perf counter (similar for Writes)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATION_TIME_NAME: &str = "system.disk.operation_time";
/// Unit of [`SYSTEM_DISK_OPERATION_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATION_TIME_UNIT: &str = "s";
/// Description of [`SYSTEM_DISK_OPERATION_TIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATION_TIME_DESCRIPTION: &str =
    "Sum of the time each operation took to complete";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{operation}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATIONS_NAME: &str = "system.disk.operations";
/// Unit of [`SYSTEM_DISK_OPERATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATIONS_UNIT: &str = "{operation}";

/// ## Description
///
/// The total storage capacity of the filesystem
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_LIMIT_NAME: &str = "system.filesystem.limit";
/// Unit of [`SYSTEM_FILESYSTEM_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_LIMIT_UNIT: &str = "By";
/// Description of [`SYSTEM_FILESYSTEM_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_LIMIT_DESCRIPTION: &str =
    "The total storage capacity of the filesystem";

/// ## Description
///
/// Reports a filesystem's space usage across different states.
///
/// ## Notes
///
/// The sum of all `system.filesystem.usage` values over the different `system.filesystem.state` attributes
/// SHOULD equal the total storage capacity of the filesystem, that is `system.filesystem.limit`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_USAGE_NAME: &str = "system.filesystem.usage";
/// Unit of [`SYSTEM_FILESYSTEM_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_USAGE_UNIT: &str = "By";
/// Description of [`SYSTEM_FILESYSTEM_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_USAGE_DESCRIPTION: &str =
    "Reports a filesystem's space usage across different states.";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_UTILIZATION_NAME: &str = "system.filesystem.utilization";
/// Unit of [`SYSTEM_FILESYSTEM_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_UTILIZATION_UNIT: &str = "1";

/// ## Description
///
/// An estimate of how much memory is available for starting new applications, without causing swapping
///
/// ## Notes
///
/// This is an alternative to `system.memory.usage` metric with `state=free`.
/// Linux starting from 3.14 exports "available" memory. It takes "free" memory as a baseline, and then factors in kernel-specific values.
/// This is supposed to be more accurate than just "free" memory.
/// For reference, see the calculations [here](https://superuser.com/a/980821).
/// See also `MemAvailable` in [/proc/meminfo](https://man7.org/linux/man-pages/man5/proc.5.html)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_AVAILABLE_NAME: &str = "system.linux.memory.available";
/// Unit of [`SYSTEM_LINUX_MEMORY_AVAILABLE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_AVAILABLE_UNIT: &str = "By";
/// Description of [`SYSTEM_LINUX_MEMORY_AVAILABLE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_AVAILABLE_DESCRIPTION: &str =
    "An estimate of how much memory is available for starting new applications, without causing swapping";

/// ## Description
///
/// Reports the memory used by the Linux kernel for managing caches of frequently used objects.
///
/// ## Notes
///
/// The sum over the `reclaimable` and `unreclaimable` state values in `linux.memory.slab.usage` SHOULD be equal to the total slab memory available on the system.
/// Note that the total slab memory is not constant and may vary over time.
/// See also the [Slab allocator](https://blogs.oracle.com/linux/post/understanding-linux-kernel-memory-statistics) and `Slab` in [/proc/meminfo](https://man7.org/linux/man-pages/man5/proc.5.html)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_SLAB_USAGE_NAME: &str = "system.linux.memory.slab.usage";
/// Unit of [`SYSTEM_LINUX_MEMORY_SLAB_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_SLAB_USAGE_UNIT: &str = "By";
/// Description of [`SYSTEM_LINUX_MEMORY_SLAB_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_SLAB_USAGE_DESCRIPTION: &str =
    "Reports the memory used by the Linux kernel for managing caches of frequently used objects.";

/// ## Description
///
/// Total memory available in the system.
///
/// ## Notes
///
/// Its value SHOULD equal the sum of `system.memory.state` over all states
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_LIMIT_NAME: &str = "system.memory.limit";
/// Unit of [`SYSTEM_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_LIMIT_UNIT: &str = "By";
/// Description of [`SYSTEM_MEMORY_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_LIMIT_DESCRIPTION: &str = "Total memory available in the system.";

/// ## Description
///
/// Shared memory used (mostly by tmpfs).
///
/// ## Notes
///
/// Equivalent of `shared` from [`free` command](https://man7.org/linux/man-pages/man1/free.1.html) or
/// `Shmem` from [`/proc/meminfo`](https://man7.org/linux/man-pages/man5/proc.5.html)"
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_SHARED_NAME: &str = "system.memory.shared";
/// Unit of [`SYSTEM_MEMORY_SHARED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_SHARED_UNIT: &str = "By";
/// Description of [`SYSTEM_MEMORY_SHARED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_SHARED_DESCRIPTION: &str = "Shared memory used (mostly by tmpfs).";

/// ## Description
///
/// Reports memory in use by state.
///
/// ## Notes
///
/// The sum over all `system.memory.state` values SHOULD equal the total memory
/// available on the system, that is `system.memory.limit`
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_USAGE_NAME: &str = "system.memory.usage";
/// Unit of [`SYSTEM_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_USAGE_UNIT: &str = "By";
/// Description of [`SYSTEM_MEMORY_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_USAGE_DESCRIPTION: &str = "Reports memory in use by state.";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_UTILIZATION_NAME: &str = "system.memory.utilization";
/// Unit of [`SYSTEM_MEMORY_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_UTILIZATION_UNIT: &str = "1";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{connection}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_CONNECTIONS_NAME: &str = "system.network.connections";
/// Unit of [`SYSTEM_NETWORK_CONNECTIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_CONNECTIONS_UNIT: &str = "{connection}";

/// ## Description
///
/// Count of packets that are dropped or discarded even though there was no error
///
/// ## Notes
///
/// Measured as:
///
/// - Linux: the `drop` column in `/proc/dev/net` ([source](https://web.archive.org/web/20180321091318/http://www.onlamp.com/pub/a/linux/2000/11/16/LinuxAdmin.html))
/// - Windows: [`InDiscards`/`OutDiscards`](https://docs.microsoft.com/windows/win32/api/netioapi/ns-netioapi-mib_if_row2)
///   from [`GetIfEntry2`](https://docs.microsoft.com/windows/win32/api/netioapi/nf-netioapi-getifentry2)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{packet}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_DROPPED_NAME: &str = "system.network.dropped";
/// Unit of [`SYSTEM_NETWORK_DROPPED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_DROPPED_UNIT: &str = "{packet}";
/// Description of [`SYSTEM_NETWORK_DROPPED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_DROPPED_DESCRIPTION: &str =
    "Count of packets that are dropped or discarded even though there was no error";

/// ## Description
///
/// Count of network errors detected
///
/// ## Notes
///
/// Measured as:
///
/// - Linux: the `errs` column in `/proc/dev/net` ([source](https://web.archive.org/web/20180321091318/http://www.onlamp.com/pub/a/linux/2000/11/16/LinuxAdmin.html)).
/// - Windows: [`InErrors`/`OutErrors`](https://docs.microsoft.com/windows/win32/api/netioapi/ns-netioapi-mib_if_row2)
///   from [`GetIfEntry2`](https://docs.microsoft.com/windows/win32/api/netioapi/nf-netioapi-getifentry2)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{error}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_ERRORS_NAME: &str = "system.network.errors";
/// Unit of [`SYSTEM_NETWORK_ERRORS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_ERRORS_UNIT: &str = "{error}";
/// Description of [`SYSTEM_NETWORK_ERRORS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_ERRORS_DESCRIPTION: &str = "Count of network errors detected";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_IO_NAME: &str = "system.network.io";
/// Unit of [`SYSTEM_NETWORK_IO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_IO_UNIT: &str = "By";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{packet}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_PACKETS_NAME: &str = "system.network.packets";
/// Unit of [`SYSTEM_NETWORK_PACKETS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_PACKETS_UNIT: &str = "{packet}";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{fault}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_FAULTS_NAME: &str = "system.paging.faults";
/// Unit of [`SYSTEM_PAGING_FAULTS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_FAULTS_UNIT: &str = "{fault}";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{operation}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_OPERATIONS_NAME: &str = "system.paging.operations";
/// Unit of [`SYSTEM_PAGING_OPERATIONS_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_OPERATIONS_UNIT: &str = "{operation}";

/// ## Description
///
/// Unix swap or windows pagefile usage
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_USAGE_NAME: &str = "system.paging.usage";
/// Unit of [`SYSTEM_PAGING_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_USAGE_UNIT: &str = "By";
/// Description of [`SYSTEM_PAGING_USAGE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_USAGE_DESCRIPTION: &str = "Unix swap or windows pagefile usage";

/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `1` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_UTILIZATION_NAME: &str = "system.paging.utilization";
/// Unit of [`SYSTEM_PAGING_UTILIZATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_UTILIZATION_UNIT: &str = "1";

/// ## Description
///
/// Total number of processes in each state
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `{process}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_COUNT_NAME: &str = "system.process.count";
/// Unit of [`SYSTEM_PROCESS_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_COUNT_UNIT: &str = "{process}";
/// Description of [`SYSTEM_PROCESS_COUNT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_COUNT_DESCRIPTION: &str = "Total number of processes in each state";

/// ## Description
///
/// Total number of processes created over uptime of the host
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `counter` |
/// | Unit: | `{process}` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_CREATED_NAME: &str = "system.process.created";
/// Unit of [`SYSTEM_PROCESS_CREATED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_CREATED_UNIT: &str = "{process}";
/// Description of [`SYSTEM_PROCESS_CREATED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_CREATED_DESCRIPTION: &str =
    "Total number of processes created over uptime of the host";

/// ## Description
///
/// The time the system has been running
///
/// ## Notes
///
/// Instrumentations SHOULD use a gauge with type `double` and measure uptime in seconds as a floating point number with the highest precision available.
/// The actual accuracy would depend on the instrumentation and operating system
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `gauge` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_UPTIME_NAME: &str = "system.uptime";
/// Unit of [`SYSTEM_UPTIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_UPTIME_UNIT: &str = "s";
/// Description of [`SYSTEM_UPTIME_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_UPTIME_DESCRIPTION: &str = "The time the system has been running";

/// ## Description
///
/// Garbage collection duration.
///
/// ## Notes
///
/// The values can be retrieve from [`perf_hooks.PerformanceObserver(...).observe({ entryTypes: ['gc'] })`](https://nodejs.org/api/perf_hooks.html#performanceobserverobserveoptions)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_DURATION_NAME: &str = "v8js.gc.duration";
/// Unit of [`V8JS_GC_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_DURATION_UNIT: &str = "s";
/// Description of [`V8JS_GC_DURATION_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_DURATION_DESCRIPTION: &str = "Garbage collection duration.";

/// ## Description
///
/// Heap space available size.
///
/// ## Notes
///
/// Value can be retrieved from value `space_available_size` of [`v8.getHeapSpaceStatistics()`](https://nodejs.org/api/v8.html#v8getheapspacestatistics)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_AVAILABLE_SIZE_NAME: &str = "v8js.heap.space.available_size";
/// Unit of [`V8JS_HEAP_SPACE_AVAILABLE_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_AVAILABLE_SIZE_UNIT: &str = "By";
/// Description of [`V8JS_HEAP_SPACE_AVAILABLE_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_AVAILABLE_SIZE_DESCRIPTION: &str = "Heap space available size.";

/// ## Description
///
/// Committed size of a heap space.
///
/// ## Notes
///
/// Value can be retrieved from value `physical_space_size` of [`v8.getHeapSpaceStatistics()`](https://nodejs.org/api/v8.html#v8getheapspacestatistics)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_PHYSICAL_SIZE_NAME: &str = "v8js.heap.space.physical_size";
/// Unit of [`V8JS_HEAP_SPACE_PHYSICAL_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_PHYSICAL_SIZE_UNIT: &str = "By";
/// Description of [`V8JS_HEAP_SPACE_PHYSICAL_SIZE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_PHYSICAL_SIZE_DESCRIPTION: &str = "Committed size of a heap space.";

/// ## Description
///
/// Total heap memory size pre-allocated.
///
/// ## Notes
///
/// The value can be retrieved from value `space_size` of [`v8.getHeapSpaceStatistics()`](https://nodejs.org/api/v8.html#v8getheapspacestatistics)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_LIMIT_NAME: &str = "v8js.memory.heap.limit";
/// Unit of [`V8JS_MEMORY_HEAP_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_LIMIT_UNIT: &str = "By";
/// Description of [`V8JS_MEMORY_HEAP_LIMIT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_LIMIT_DESCRIPTION: &str = "Total heap memory size pre-allocated.";

/// ## Description
///
/// Heap Memory size allocated.
///
/// ## Notes
///
/// The value can be retrieved from value `space_used_size` of [`v8.getHeapSpaceStatistics()`](https://nodejs.org/api/v8.html#v8getheapspacestatistics)
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `updowncounter` |
/// | Unit: | `By` |
/// | Status: | `Development` |
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_USED_NAME: &str = "v8js.memory.heap.used";
/// Unit of [`V8JS_MEMORY_HEAP_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_USED_UNIT: &str = "By";
/// Description of [`V8JS_MEMORY_HEAP_USED_NAME`].
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_USED_DESCRIPTION: &str = "Heap Memory size allocated.";
