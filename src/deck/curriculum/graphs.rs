use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 4,
    name: "Graphs (DFS, BFS, Dijkstra, MST)",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Graphs",
        subtitle: "DFS, BFS, Dijkstra & Minimum Spanning Tree",
        description: "Network structures and advanced algorithms",
    },
    Slide::Content {
        title: "What is a Graph?",
        points: &[
            "Collection of nodes (vertices) connected by edges",
            "**Directed**: Edges have direction (one-way)",
            "**Undirected**: Edges are bidirectional",
            "**Weighted**: Edges have associated costs/weights",
            "**Unweighted**: All edges have same importance",
            "Used in: Social networks, maps, networks, dependencies",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Graph Terminology",
        points: &[
            "**Vertex/Node**: Individual point in graph",
            "**Edge**: Connection between two vertices",
            "**Adjacent**: Vertices connected by an edge",
            "**Path**: Sequence of vertices connected by edges",
            "**Cycle**: Path that starts and ends at same vertex",
            "**Connected**: Path exists between any two vertices",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Graph Representation - Adjacency List",
        description: Some("Most common representation using Map/Object"),
        code: r#"// Graph using Adjacency List
class Graph {
  constructor() {
    this.adjacencyList = new Map();
  }

  // Add a vertex
  addVertex(vertex) {
    if (!this.adjacencyList.has(vertex)) {
      this.adjacencyList.set(vertex, []);
    }
  }

  // Add an edge (undirected)
  addEdge(vertex1, vertex2) {
    this.addVertex(vertex1);
    this.addVertex(vertex2);

    this.adjacencyList.get(vertex1).push(vertex2);
    this.adjacencyList.get(vertex2).push(vertex1);
  }

  // Display the graph
  display() {
    for (let [vertex, edges] of this.adjacencyList) {
      console.log(vertex + " -> " + edges.join(", "));
    }
  }
}

// Usage
const graph = new Graph();
graph.addVertex("A");
graph.addVertex("B");
graph.addVertex("C");
graph.addEdge("A", "B");
graph.addEdge("A", "C");
graph.addEdge("B", "C");

// A -> B, C
// B -> A, C
// C -> A, B"#,
    },
    Slide::Code {
        title: "Directed & Weighted Graphs",
        description: Some("Variations of graph implementation"),
        code: r#"// Directed Graph
class DirectedGraph {
  constructor() {
    this.adjacencyList = new Map();
  }

  addVertex(vertex) {
    if (!this.adjacencyList.has(vertex)) {
      this.adjacencyList.set(vertex, []);
    }
  }

  // Edge goes only one way
  addEdge(from, to) {
    this.addVertex(from);
    this.addVertex(to);
    this.adjacencyList.get(from).push(to);
  }
}

// Weighted Graph
class WeightedGraph {
  constructor() {
    this.adjacencyList = new Map();
  }

  addVertex(vertex) {
    if (!this.adjacencyList.has(vertex)) {
      this.adjacencyList.set(vertex, []);
    }
  }

  addEdge(vertex1, vertex2, weight) {
    this.addVertex(vertex1);
    this.addVertex(vertex2);

    this.adjacencyList.get(vertex1).push({ node: vertex2, weight });
    this.adjacencyList.get(vertex2).push({ node: vertex1, weight });
  }
}

const wGraph = new WeightedGraph();
wGraph.addEdge("A", "B", 5);
wGraph.addEdge("B", "C", 3);"#,
    },
    Slide::Content {
        title: "Depth-First Search (DFS)",
        points: &[
            "Explore as far as possible along each branch",
            "Uses stack (or recursion with call stack)",
            "**Applications**: Cycle detection, topological sort, pathfinding",
            "Two approaches: Recursive and Iterative",
            "Time: O(V + E), Space: O(V)",
            "V = vertices, E = edges",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "DFS - Recursive Implementation",
        description: Some("Depth-First Search using recursion"),
        code: r#"// DFS Recursive
class Graph {
  // ... (previous code)

  dfsRecursive(start) {
    const result = [];
    const visited = new Set();

    const dfs = (vertex) => {
      if (!vertex) return;

      // Mark as visited
      visited.add(vertex);
      result.push(vertex);

      // Visit all neighbors
      const neighbors = this.adjacencyList.get(vertex);
      for (let neighbor of neighbors) {
        if (!visited.has(neighbor)) {
          dfs(neighbor);
        }
      }
    };

    dfs(start);
    return result;
  }
}

// Usage
const graph = new Graph();
graph.addEdge("A", "B");
graph.addEdge("A", "C");
graph.addEdge("B", "D");
graph.addEdge("C", "E");
graph.addEdge("D", "E");
graph.addEdge("D", "F");
graph.addEdge("E", "F");

console.log(graph.dfsRecursive("A"));
// Output: ["A", "B", "D", "E", "C", "F"]

// Time: O(V + E), Space: O(V)"#,
    },
    Slide::Code {
        title: "DFS - Iterative Implementation",
        description: Some("Using explicit stack"),
        code: r#"// DFS Iterative using Stack
dfsIterative(start) {
  const result = [];
  const visited = new Set();
  const stack = [start];

  while (stack.length > 0) {
    const vertex = stack.pop();

    if (!visited.has(vertex)) {
      visited.add(vertex);
      result.push(vertex);

      // Add neighbors to stack
      const neighbors = this.adjacencyList.get(vertex);
      for (let i = neighbors.length - 1; i >= 0; i--) {
        if (!visited.has(neighbors[i])) {
          stack.push(neighbors[i]);
        }
      }
    }
  }

  return result;
}

console.log(graph.dfsIterative("A"));
// Output: ["A", "B", "D", "E", "C", "F"]

// Time: O(V + E), Space: O(V)
// Iterative avoids potential stack overflow"#,
    },
    Slide::Content {
        title: "Breadth-First Search (BFS)",
        points: &[
            "Explore all neighbors before going deeper",
            "Uses queue data structure",
            "**Applications**: Shortest path (unweighted), level-order traversal",
            "Finds shortest path in unweighted graphs",
            "Time: O(V + E), Space: O(V)",
            "Better for finding shortest path",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "BFS Implementation",
        description: Some("Breadth-First Search using queue"),
        code: r#"// BFS using Queue
bfs(start) {
  const result = [];
  const visited = new Set();
  const queue = [start];

  visited.add(start);

  while (queue.length > 0) {
    const vertex = queue.shift();
    result.push(vertex);

    // Visit all neighbors
    const neighbors = this.adjacencyList.get(vertex);
    for (let neighbor of neighbors) {
      if (!visited.has(neighbor)) {
        visited.add(neighbor);
        queue.push(neighbor);
      }
    }
  }

  return result;
}

console.log(graph.bfs("A"));
// Output: ["A", "B", "C", "D", "E", "F"]
// Visits level by level

// Time: O(V + E), Space: O(V)

// BFS with levels
bfsWithLevels(start) {
  const visited = new Set([start]);
  const queue = [[start, 0]];  // [vertex, level]
  const levels = {};

  while (queue.length > 0) {
    const [vertex, level] = queue.shift();

    if (!levels[level]) levels[level] = [];
    levels[level].push(vertex);

    for (let neighbor of this.adjacencyList.get(vertex)) {
      if (!visited.has(neighbor)) {
        visited.add(neighbor);
        queue.push([neighbor, level + 1]);
      }
    }
  }

  return levels;
}"#,
    },
    Slide::Code {
        title: "Shortest Path - Unweighted Graph",
        description: Some("Find shortest path using BFS"),
        code: r#"// Find shortest path between two vertices
shortestPath(start, end) {
  const visited = new Set([start]);
  const queue = [[start, [start]]];  // [vertex, path]

  while (queue.length > 0) {
    const [vertex, path] = queue.shift();

    // Found the destination
    if (vertex === end) {
      return path;
    }

    // Explore neighbors
    for (let neighbor of this.adjacencyList.get(vertex)) {
      if (!visited.has(neighbor)) {
        visited.add(neighbor);
        queue.push([neighbor, [...path, neighbor]]);
      }
    }
  }

  return null;  // No path exists
}

// Usage
const path = graph.shortestPath("A", "F");
console.log(path);  // ["A", "B", "D", "F"]
console.log("Distance:", path.length - 1);  // 3

// Time: O(V + E), Space: O(V)"#,
    },
    Slide::Content {
        title: "Dijkstra's Algorithm",
        points: &[
            "Find shortest path in weighted graphs",
            "Works only with non-negative weights",
            "Uses priority queue (min-heap) for efficiency",
            "**Greedy algorithm**: Picks closest unvisited vertex",
            "Time: O((V + E) log V) with min-heap",
            "Applications: GPS navigation, network routing",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Dijkstra's Algorithm - Implementation",
        description: Some("Shortest path in weighted graph"),
        code: r#"// Dijkstra's Algorithm
dijkstra(start, end) {
  const distances = {};
  const previous = {};
  const pq = new MinPriorityQueue();

  // Initialize distances
  for (let vertex of this.adjacencyList.keys()) {
    distances[vertex] = vertex === start ? 0 : Infinity;
    previous[vertex] = null;
  }

  pq.enqueue(start, 0);

  while (!pq.isEmpty()) {
    const current = pq.dequeue().element;

    if (current === end) {
      // Build path
      const path = [];
      let temp = end;
      while (temp) {
        path.push(temp);
        temp = previous[temp];
      }
      return {
        path: path.reverse(),
        distance: distances[end]
      };
    }

    // Check neighbors
    for (let neighbor of this.adjacencyList.get(current)) {
      const newDist = distances[current] + neighbor.weight;

      if (newDist < distances[neighbor.node]) {
        distances[neighbor.node] = newDist;
        previous[neighbor.node] = current;
        pq.enqueue(neighbor.node, newDist);
      }
    }
  }

  return { path: null, distance: Infinity };
}

// Time: O((V + E) log V), Space: O(V)"#,
    },
    Slide::Code {
        title: "Dijkstra with Simple Priority Queue",
        description: Some("Implementation without external library"),
        code: r#"// Simple Priority Queue for Dijkstra
class SimplePriorityQueue {
  constructor() {
    this.values = [];
  }

  enqueue(val, priority) {
    this.values.push({ val, priority });
    this.sort();
  }

  dequeue() {
    return this.values.shift();
  }

  sort() {
    this.values.sort((a, b) => a.priority - b.priority);
  }

  isEmpty() {
    return this.values.length === 0;
  }
}

// Usage with weighted graph
const wg = new WeightedGraph();
wg.addEdge("A", "B", 4);
wg.addEdge("A", "C", 2);
wg.addEdge("B", "E", 3);
wg.addEdge("C", "D", 2);
wg.addEdge("C", "F", 4);
wg.addEdge("D", "E", 3);
wg.addEdge("D", "F", 1);
wg.addEdge("E", "F", 1);

const result = wg.dijkstra("A", "E");
console.log("Path:", result.path);       // ["A", "C", "D", "F", "E"]
console.log("Distance:", result.distance); // 6"#,
    },
    Slide::Content {
        title: "Minimum Spanning Tree (MST)",
        points: &[
            "Tree connecting all vertices with minimum total edge weight",
            "No cycles, connects all vertices",
            "Two main algorithms: **Prim's** and **Kruskal's**",
            "Applications: Network design, circuit wiring, clustering",
            "**Prim's**: Grows tree from single vertex",
            "**Kruskal's**: Adds cheapest edges, avoids cycles",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Prim's Algorithm - MST",
        description: Some("Build MST starting from a vertex"),
        code: r#"// Prim's Algorithm for MST
primsAlgorithm(start) {
  const mst = [];
  const visited = new Set([start]);
  const edges = [];

  // Add all edges from start vertex
  for (let neighbor of this.adjacencyList.get(start)) {
    edges.push({
      from: start,
      to: neighbor.node,
      weight: neighbor.weight
    });
  }

  while (visited.size < this.adjacencyList.size) {
    // Sort edges by weight
    edges.sort((a, b) => a.weight - b.weight);

    // Find smallest edge to unvisited vertex
    let minEdge = null;
    let edgeIndex = 0;

    for (let i = 0; i < edges.length; i++) {
      if (!visited.has(edges[i].to)) {
        minEdge = edges[i];
        edgeIndex = i;
        break;
      }
    }

    if (!minEdge) break;

    // Add edge to MST
    mst.push(minEdge);
    visited.add(minEdge.to);
    edges.splice(edgeIndex, 1);

    // Add new edges
    for (let neighbor of this.adjacencyList.get(minEdge.to)) {
      if (!visited.has(neighbor.node)) {
        edges.push({
          from: minEdge.to,
          to: neighbor.node,
          weight: neighbor.weight
        });
      }
    }
  }

  return mst;
}

// Time: O(E log V), Space: O(V)"#,
    },
    Slide::Code {
        title: "Kruskal's Algorithm - MST",
        description: Some("Build MST by adding smallest edges"),
        code: r#"// Union-Find for Kruskal's Algorithm
class UnionFind {
  constructor(size) {
    this.parent = Array(size).fill(0).map((_, i) => i);
    this.rank = Array(size).fill(0);
  }

  find(x) {
    if (this.parent[x] !== x) {
      this.parent[x] = this.find(this.parent[x]);
    }
    return this.parent[x];
  }

  union(x, y) {
    const rootX = this.find(x);
    const rootY = this.find(y);

    if (rootX === rootY) return false;

    if (this.rank[rootX] < this.rank[rootY]) {
      this.parent[rootX] = rootY;
    } else if (this.rank[rootX] > this.rank[rootY]) {
      this.parent[rootY] = rootX;
    } else {
      this.parent[rootY] = rootX;
      this.rank[rootX]++;
    }

    return true;
  }
}

// Kruskal's Algorithm
kruskalsAlgorithm() {
  const edges = [];
  const vertices = new Map();
  let idx = 0;

  // Map vertices to indices
  for (let vertex of this.adjacencyList.keys()) {
    vertices.set(vertex, idx++);
  }

  // Collect all edges
  const seen = new Set();
  for (let [from, neighbors] of this.adjacencyList) {
    for (let neighbor of neighbors) {
      const edgeKey = [from, neighbor.node].sort().join('-');
      if (!seen.has(edgeKey)) {
        edges.push({ from, to: neighbor.node, weight: neighbor.weight });
        seen.add(edgeKey);
      }
    }
  }

  // Sort edges by weight
  edges.sort((a, b) => a.weight - b.weight);

  const uf = new UnionFind(vertices.size);
  const mst = [];

  for (let edge of edges) {
    const u = vertices.get(edge.from);
    const v = vertices.get(edge.to);

    if (uf.union(u, v)) {
      mst.push(edge);
    }
  }

  return mst;
}"#,
    },
    Slide::Code {
        title: "Cycle Detection in Graph",
        description: Some("Detect cycles using DFS"),
        code: r#"// Detect cycle in undirected graph
hasCycleUndirected() {
  const visited = new Set();

  const dfs = (vertex, parent) => {
    visited.add(vertex);

    for (let neighbor of this.adjacencyList.get(vertex)) {
      if (!visited.has(neighbor)) {
        if (dfs(neighbor, vertex)) return true;
      } else if (neighbor !== parent) {
        return true;  // Cycle found
      }
    }

    return false;
  };

  for (let vertex of this.adjacencyList.keys()) {
    if (!visited.has(vertex)) {
      if (dfs(vertex, null)) return true;
    }
  }

  return false;
}

// Detect cycle in directed graph
hasCycleDirected() {
  const visited = new Set();
  const recStack = new Set();

  const dfs = (vertex) => {
    visited.add(vertex);
    recStack.add(vertex);

    for (let neighbor of this.adjacencyList.get(vertex)) {
      if (!visited.has(neighbor)) {
        if (dfs(neighbor)) return true;
      } else if (recStack.has(neighbor)) {
        return true;  // Back edge (cycle)
      }
    }

    recStack.delete(vertex);
    return false;
  };

  for (let vertex of this.adjacencyList.keys()) {
    if (!visited.has(vertex)) {
      if (dfs(vertex)) return true;
    }
  }

  return false;
}"#,
    },
    Slide::Code {
        title: "Topological Sort",
        description: Some("Linear ordering of vertices in directed acyclic graph"),
        code: r#"// Topological Sort using DFS
topologicalSort() {
  const visited = new Set();
  const stack = [];

  const dfs = (vertex) => {
    visited.add(vertex);

    for (let neighbor of this.adjacencyList.get(vertex)) {
      if (!visited.has(neighbor)) {
        dfs(neighbor);
      }
    }

    // Add to stack after visiting all neighbors
    stack.push(vertex);
  };

  // Visit all vertices
  for (let vertex of this.adjacencyList.keys()) {
    if (!visited.has(vertex)) {
      dfs(vertex);
    }
  }

  // Return reversed stack
  return stack.reverse();
}

// Example: Course prerequisites
const courses = new DirectedGraph();
courses.addEdge("Data Structures", "Algorithms");
courses.addEdge("Intro to CS", "Data Structures");
courses.addEdge("Intro to CS", "Databases");
courses.addEdge("Databases", "Web Dev");

console.log(courses.topologicalSort());
// ["Intro to CS", "Data Structures", "Algorithms", "Databases", "Web Dev"]

// Time: O(V + E), Space: O(V)"#,
    },
    Slide::Content {
        title: "Time & Space Complexity Summary",
        points: &[
            "**DFS/BFS**: O(V + E) time, O(V) space",
            "**Dijkstra**: O((V + E) log V) with min-heap",
            "**Prim's MST**: O(E log V) with priority queue",
            "**Kruskal's MST**: O(E log E) for sorting edges",
            "**Topological Sort**: O(V + E) time, O(V) space",
            "**Cycle Detection**: O(V + E) time, O(V) space",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Practice Problems",
        points: &[
            "1. Number of islands (2D grid)",
            "2. Clone a graph",
            "3. Course schedule (topological sort)",
            "4. Network delay time (Dijkstra)",
            "5. Word ladder problem",
            "6. Minimum spanning tree cost",
            "7. Detect cycle in directed graph",
        ],
        diagram: false,
    },
];
